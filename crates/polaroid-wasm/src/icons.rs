//! Inline SVG icons for the toolbar and slot controls.

use polaroid_core::icons::Icon;
use wasm_bindgen::prelude::*;

/// Render an icon by name as an `<svg>` string for `innerHTML`.
///
/// Names: `printer`, `upload`, `delete`, `exclude`, `replace`, `file-pen`.
///
/// # Example (TypeScript)
///
/// ```typescript
/// button.innerHTML = render_icon('printer', 'mr-2 h-5 w-5') + 'Print';
/// ```
#[wasm_bindgen]
pub fn render_icon(name: &str, class: Option<String>) -> Result<String, JsValue> {
    let icon = name.parse::<Icon>().map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(match class {
        Some(class) => icon.svg_with_class(&class),
        None => icon.svg(),
    })
}

/// Names accepted by `render_icon`.
#[wasm_bindgen]
pub fn icon_names() -> Vec<String> {
    Icon::ALL.iter().map(|icon| icon.name().to_string()).collect()
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_render_unknown_icon_errors() {
        assert!(render_icon("camera", None).is_err());
    }
}
