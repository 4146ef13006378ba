//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Excel error: {0}")]
    Excel(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_from_regex() {
        let regex_error = regex::Regex::new("(").unwrap_err();
        let error: Error = regex_error.into();
        assert!(matches!(error, Error::Pattern(_)));
        assert!(format!("{}", error).starts_with("Pattern error"));
    }

    #[test]
    fn test_error_display_excel() {
        let error = Error::Excel("シート名設定エラー".to_string());
        assert_eq!(format!("{}", error), "Excel error: シート名設定エラー");
    }
}
