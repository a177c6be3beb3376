//! CSS minification.
//!
//! Uses lightningcss with structural minification enabled: duplicate
//! declarations are dropped and rules with identical bodies are merged
//! before printing.

use std::path::Path;

use lightningcss::stylesheet::{MinifyOptions, ParserOptions, PrinterOptions, StyleSheet};

use crate::error::{AssetError, Result};

/// Minify CSS source code.
///
/// `path` is only used for error locations.
pub fn minify_css(source: &str, path: &Path) -> Result<String> {
    let css_error = |message: String| AssetError::Css(path.to_path_buf(), message);

    let options = ParserOptions {
        filename: path.display().to_string(),
        ..ParserOptions::default()
    };
    let mut stylesheet =
        StyleSheet::parse(source, options).map_err(|e| css_error(e.to_string()))?;

    stylesheet
        .minify(MinifyOptions::default())
        .map_err(|e| css_error(e.to_string()))?;

    let result = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..PrinterOptions::default()
        })
        .map_err(|e| css_error(e.to_string()))?;
    Ok(result.code)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minify(source: &str) -> String {
        minify_css(source, Path::new("styles.css")).unwrap()
    }

    #[test]
    fn test_duplicate_declaration() {
        let source = ".a{color:red;color:red}";
        let out = minify(source);
        assert!(out.len() <= source.len());
        assert!(out.starts_with(".a{"));
        assert!(out.contains("color:red"));
    }

    #[test]
    fn test_whitespace_and_comments_removed() {
        let source = "/* header */\nbody {\n    margin: 0;\n    padding: 0;\n}\n";
        let out = minify(source);
        assert!(!out.contains("header"));
        assert!(!out.contains('\n'));
        assert!(out.len() < source.len());
    }

    #[test]
    fn test_rules_with_same_body_are_merged() {
        let out = minify(".a { color: red }\n.b { color: red }\n");
        assert_eq!(out.matches('{').count(), 1);
        assert!(out.contains(".a"));
        assert!(out.contains(".b"));
    }

    #[test]
    fn test_second_pass_does_not_grow() {
        let source = "h1 { font-weight: bold; margin: 0 auto }\n@media (max-width: 600px) { h1 { margin: 0 } }\n";
        let once = minify(source);
        let twice = minify(&once);
        assert!(twice.len() <= once.len());
    }

    #[test]
    fn test_empty_stylesheet() {
        assert_eq!(minify(""), "");
    }

    #[test]
    fn test_invalid_selector_is_rejected() {
        let err = minify_css("..a{color:red}", Path::new("broken.css")).unwrap_err();
        match err {
            AssetError::Css(path, _) => assert_eq!(path, Path::new("broken.css")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
