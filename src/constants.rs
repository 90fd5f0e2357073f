//! Application-wide constants and default values
//!
//! Centralized location for all hard-coded values to improve maintainability

/// Terminal sizing constants
pub mod terminal {
    /// Radius of a terminal circle
    pub const RADIUS: f32 = 10.0;

    /// Vertical distance between two terminals on the same side of a node
    pub const SPACING: f32 = 40.0;
}

/// Node layout constants
pub mod node {
    /// Fixed width of every node body
    pub const WIDTH: f32 = 100.0;

    /// Default body fill color (black)
    pub const BODY_COLOR: [u8; 4] = [0, 0, 0, 255];

    /// Default idle terminal color (blue)
    pub const TERMINAL_COLOR: [u8; 4] = [0, 0, 255, 255];

    /// Default active terminal color (red)
    pub const ACTIVE_TERMINAL_COLOR: [u8; 4] = [255, 0, 0, 255];
}

/// Connection line constants
pub mod connection {
    /// Stroke width of committed and rubber-band lines
    pub const STROKE_WIDTH: f32 = 5.0;
}

/// Canvas framing constants
pub mod canvas {
    /// Horizontal padding between the canvas edge and the frame
    pub const PADDING_X: f32 = 100.0;

    /// Vertical padding between the canvas edge and the frame
    pub const PADDING_Y: f32 = 75.0;

    /// Stroke width of the padding frame
    pub const FRAME_STROKE_WIDTH: f32 = 5.0;

    /// Size of the "new node" control in the top-left corner
    pub const NEW_NODE_BUTTON_SIZE: [f32; 2] = [200.0, 50.0];

    /// Fallback canvas size used before the first resize notification
    pub const DEFAULT_SIZE: [f32; 2] = [800.0, 600.0];

    /// Background color of the canvas (white)
    pub const BACKGROUND_COLOR: [u8; 4] = [255, 255, 255, 255];

    /// Frame and button color (black)
    pub const FRAME_COLOR: [u8; 4] = [0, 0, 0, 255];
}

/// Startup layout constants
pub mod startup {
    /// Inputs on the starting node and on every node created from the control
    pub const NUM_INPUTS: usize = 2;

    /// Outputs on the starting node and on every node created from the control
    pub const NUM_OUTPUTS: usize = 1;

    /// Position the starting node is first built at
    pub const FIRST_NODE_POSITION: [f32; 2] = [100.0, 75.0];

    /// Extra offset added on top of half the padding when placing nodes
    pub const PLACEMENT_NUDGE: f32 = 50.0;

    /// Number of standalone output terminals along the left padding edge
    pub const NUM_ENVIRONMENT_TERMINALS: usize = 10;

    /// Vertical distance between standalone terminals
    pub const ENVIRONMENT_TERMINAL_SPACING: f32 = 100.0;
}
