// Web front-end constants: DOM hooks and logging.

// Id of the container element the canvas is appended to
pub const CONTAINER_ID: &str = "waves";

// Id given to the created canvas, handy for page styling
pub const CANVAS_ID: &str = "waves-canvas";

pub const LOG_LEVEL: log::Level = log::Level::Info;
