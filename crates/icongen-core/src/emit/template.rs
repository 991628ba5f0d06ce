//! Component source templating.

use crate::target::IconStyle;

/// File extension of emitted component sources.
pub const COMPONENT_EXT: &str = "tsx";

/// Class token carried by every generated root element.
const CLASS_TOKEN: &str = "icon";

/// Renders the complete component definition for one icon.
///
/// `body` is embedded verbatim between the root element's tags; callers
/// indent it first (see [`super::reindent_markup`]).
pub fn component_source(name: &str, label: &str, style: IconStyle, body: &str) -> String {
    let mode = match style {
        IconStyle::Solid => r#"fill="currentColor""#,
        IconStyle::Outline => r#"fill="none" stroke="currentColor" strokeWidth={1.5}"#,
    };
    format!(
        r#"import type {{ IconProps }} from "../types";

export function {name}(props: IconProps) {{
  return (
    <svg
      viewBox="0 0 24 24"
      {mode}
      className="{CLASS_TOKEN}"
      aria-label="{label}"
      {{...props}}
    >
{body}
    </svg>
  );
}}
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solid_component_shape() {
        let text = component_source(
            "CheckIcon",
            "check",
            IconStyle::Solid,
            r#"      <path d="M1 1L2 2" />"#,
        );
        assert!(text.contains("export function CheckIcon(props: IconProps)"));
        assert!(text.contains(r#"aria-label="check""#));
        assert!(text.contains(r#"d="M1 1L2 2""#));
        assert!(text.contains(r#"fill="currentColor""#));
        assert!(!text.contains("stroke="));
        assert!(text.contains("{...props}"));
    }

    #[test]
    fn outline_component_shape() {
        let text = component_source(
            "ArrowLeftIcon",
            "arrow-left",
            IconStyle::Outline,
            r#"      <path d="M10 19l-7-7" />"#,
        );
        assert!(text.contains("export function ArrowLeftIcon(props: IconProps)"));
        assert!(text.contains(r#"stroke="currentColor""#));
        assert!(text.contains(r#"fill="none""#));
        assert!(text.contains("strokeWidth={1.5}"));
    }

    #[test]
    fn imports_shared_prop_type() {
        let text = component_source("XIcon", "x", IconStyle::Solid, "");
        assert!(text.starts_with(r#"import type { IconProps } from "../types";"#));
        assert!(text.contains(r#"className="icon""#));
    }
}
