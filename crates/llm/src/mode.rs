/// Summary length limits, in model tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthPolicy {
    /// Maximum summary length
    pub max_length: usize,

    /// Minimum summary length
    pub min_length: usize,
}

/// Summary presentation mode
///
/// Controls target length and output formatting. Unrecognized labels fall
/// back to [`Mode::Standard`] rather than erroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Short summary
    Brief,

    /// Longer, more thorough summary
    Detailed,

    /// Medium-length summary rendered as bullet points
    Bullet,

    /// Fallback for unrecognized mode labels
    Standard,
}

impl Mode {
    /// Resolve a mode label. Unknown labels map to `Standard` silently.
    pub fn from_label(label: &str) -> Self {
        match label {
            "brief" => Mode::Brief,
            "detailed" => Mode::Detailed,
            "bullet" => Mode::Bullet,
            _ => Mode::Standard,
        }
    }

    /// Length limits for this mode
    pub fn length_policy(&self) -> LengthPolicy {
        match self {
            Mode::Brief => LengthPolicy {
                max_length: 120,
                min_length: 50,
            },
            Mode::Detailed => LengthPolicy {
                max_length: 250,
                min_length: 100,
            },
            Mode::Bullet => LengthPolicy {
                max_length: 180,
                min_length: 70,
            },
            Mode::Standard => LengthPolicy {
                max_length: 150,
                min_length: 60,
            },
        }
    }
}
