use serde::Serialize;
use std::fmt::{Display, Formatter, Result as FormatResult};
use std::panic::Location as PanicLocation;

/// Source position captured at the point an error was created.
///
/// Every error variant in the SDK carries one of these, filled in via
/// `#[track_caller]` so the location reflects the caller that hit the
/// failure rather than the `From` impl that wrapped it.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ErrorLocation {
    pub file: &'static str,
    pub line: u32,
    pub column: u32,
}

impl ErrorLocation {
    pub const fn from(location: &'static PanicLocation<'static>) -> Self {
        Self {
            file: location.file(),
            line: location.line(),
            column: location.column(),
        }
    }
}

impl Display for ErrorLocation {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FormatResult {
        write!(formatter, "[{}:{}:{}]", self.file, self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::Location;

    #[test]
    fn given_location_caller_when_captured_then_holds_file_line_column() {
        let location = ErrorLocation::from(Location::caller());

        assert!(location.file.contains("error_location.rs"));
        assert!(location.line > 0);
        assert!(location.column > 0);
    }

    #[test]
    fn given_error_location_when_displayed_then_bracketed_triple() {
        let location = ErrorLocation {
            file: "src/version/mod.rs",
            line: 42,
            column: 9,
        };

        assert_eq!(format!("{location}"), "[src/version/mod.rs:42:9]");
    }
}
