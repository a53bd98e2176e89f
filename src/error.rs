//! Error types for the pick_colors library

use thiserror::Error;

/// Result type alias for pick_colors operations
pub type Result<T> = std::result::Result<T, PickerError>;

/// Error types for color conversion and picker state operations
#[derive(Error, Debug)]
pub enum PickerError {
    /// Input is not a 6-digit hex color (optionally prefixed with `#`)
    #[error("Invalid color format: {input:?} is not a 6-digit hex color")]
    InvalidColorFormat { input: String },

    /// Hue, saturation or lightness outside its domain
    #[error("{component} out of range: {value} (expected {min}..={max})")]
    OutOfRange {
        component: &'static str,
        value: i32,
        min: i32,
        max: i32,
    },

    /// History index past the end of the list
    #[error("History index {index} out of bounds (length {len})")]
    HistoryIndex { index: usize, len: usize },

    /// Configuration or stored history could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PickerError {
    /// Create an invalid format error for the given input
    pub fn invalid_format(input: impl Into<String>) -> Self {
        Self::InvalidColorFormat {
            input: input.into(),
        }
    }

    /// Create an out-of-range error for an HSL component
    pub fn out_of_range(component: &'static str, value: i32, min: i32, max: i32) -> Self {
        Self::OutOfRange {
            component,
            value,
            min,
            max,
        }
    }

    /// Create a configuration error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Check if this error is caused by caller input that can be corrected and retried
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            PickerError::InvalidColorFormat { .. }
                | PickerError::OutOfRange { .. }
                | PickerError::HistoryIndex { .. }
        )
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            PickerError::InvalidColorFormat { input } => {
                format!("\"{}\" is not a valid color. Use a hex code like #3366cc.", input)
            }
            PickerError::OutOfRange { component, min, max, .. } => {
                format!("The {} must be between {} and {}.", component, min, max)
            }
            PickerError::HistoryIndex { .. } => {
                "That color is no longer in the list.".to_string()
            }
            PickerError::Config { .. } => {
                "Could not load saved settings. Defaults will be used.".to_string()
            }
        }
    }
}
