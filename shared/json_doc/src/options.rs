//! Parser settings.

/// Default limit for nested arrays/objects.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Hard ceiling on nesting. The parser recurses once per level, so any
/// configured limit above this is lowered to it.
pub const MAX_SAFE_DEPTH: usize = 1024;

/// Settings for a single parse.
///
/// The defaults accept everything the engine has always accepted: content
/// after the top-level value is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Ignore anything following the top-level value
    pub allow_trailing: bool,
    /// Maximum nesting of arrays and objects
    pub max_depth: usize,
}

impl ParseOptions {
    /// Rejects trailing content, keeps the default depth limit.
    pub const fn strict() -> Self {
        Self {
            allow_trailing: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Sets the nesting limit, capped at [`MAX_SAFE_DEPTH`].
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = clamp_depth(max_depth);
        self
    }

    /// The limit the parser actually enforces, even when `max_depth` was
    /// set directly on the field.
    pub const fn effective_max_depth(&self) -> usize {
        clamp_depth(self.max_depth)
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            allow_trailing: true,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

const fn clamp_depth(depth: usize) -> usize {
    if depth > MAX_SAFE_DEPTH {
        MAX_SAFE_DEPTH
    } else {
        depth
    }
}
