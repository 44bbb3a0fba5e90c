//! Handlebars helpers used by README templates.
//!
//! Value helpers are registered under a snake_case name and a camelCase alias
//! (`escape_table_cell` / `escapeTableCell`) so templates written in either
//! convention render. `hasItems`, `hasRequiredInputs` and `isRuntime` are
//! block helpers with an optional `{{else}}` branch.

use action_docs_core::HeaderLevel;
use action_docs_core::metadata::node_version;
use handlebars::{
    Context, Handlebars, Helper, HelperDef, HelperResult, Output, PathAndJson, RenderContext,
    RenderError, RenderErrorReason, Renderable, ScopedJson, handlebars_helper,
};
use serde_json::Value;

/// Deepest markdown heading.
const MAX_HEADING_DEPTH: u64 = 6;

/// Percent-encodes `value` for a shields.io badge path segment.
///
/// Encoding follows the URI component rules, then `-` and `_` are doubled
/// because shields.io uses them as separators.
///
/// # Examples
///
/// ```
/// use action_docs_render::url_encode;
///
/// assert_eq!(url_encode("build status"), "build%20status");
/// assert_eq!(url_encode("v1-beta_2"), "v1--beta__2");
/// ```
#[must_use]
pub fn url_encode(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'-' => encoded.push_str("--"),
            b'_' => encoded.push_str("__"),
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => encoded.push(char::from(byte)),
            other => encoded.push_str(&format!("%{other:02X}")),
        }
    }
    encoded
}

/// Makes `value` safe inside a markdown table cell.
///
/// # Examples
///
/// ```
/// use action_docs_render::escape_table_cell;
///
/// assert_eq!(escape_table_cell("a|b\nc"), "a\\|b c");
/// ```
#[must_use]
pub fn escape_table_cell(value: &str) -> String {
    value.replace('|', "\\|").replace('\n', " ")
}

/// Formats an input default for the inputs table.
///
/// Absent and empty defaults render as `-`.
#[must_use]
pub fn format_default(value: Option<&str>) -> String {
    match value {
        Some(text) if !text.is_empty() => format!("`{}`", text.replace('|', "\\|")),
        _ => "-".to_string(),
    }
}

/// Renders a `with:` value, switching to a literal block for multi-line text.
///
/// # Examples
///
/// ```
/// use action_docs_render::yaml_value;
///
/// assert_eq!(yaml_value("plain", 6), "plain");
/// assert_eq!(yaml_value("a\nb", 2), "|\n  a\n  b");
/// ```
#[must_use]
pub fn yaml_value(value: &str, indent: usize) -> String {
    if !value.contains('\n') {
        return value.to_string();
    }
    let padding = " ".repeat(indent);
    let lines: Vec<String> = value
        .split('\n')
        .map(|line| format!("{padding}{line}"))
        .collect();
    format!("|\n{}", lines.join("\n"))
}

/// Renders a commented-out usage line for an input.
fn input_comment(input: &Value, marker: &str) -> String {
    let text = |key: &str| input.get(key).and_then(Value::as_str).unwrap_or_default();
    match input.get("default") {
        None | Some(Value::Null) => {
            format!("{marker}{}: # {}", text("id"), text("description"))
        }
        Some(default) => format!("{marker}{}: '{}'", text("id"), display(default)),
    }
}

fn display(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn has_items(value: &Value) -> bool {
    value.as_array().is_some_and(|items| !items.is_empty())
}

fn any_required(value: &Value) -> bool {
    value.as_array().is_some_and(|inputs| {
        inputs
            .iter()
            .any(|input| input.get("required").and_then(Value::as_bool) == Some(true))
    })
}

handlebars_helper!(UrlEncode: |value: Json| value.as_str().map(url_encode).unwrap_or_default());
handlebars_helper!(EscapeTableCell: |value: Json| {
    value.as_str().map(escape_table_cell).unwrap_or_default()
});
handlebars_helper!(YesNo: |value: Json| if value.as_bool() == Some(true) { "Yes" } else { "No" });
handlebars_helper!(FormatDefault: |value: Json| format_default(value.as_str()));
handlebars_helper!(NodeVersion: |using: Json| {
    using.as_str().and_then(node_version).unwrap_or_default().to_string()
});
handlebars_helper!(InputComment: |input: Json| input_comment(input, "# "));
handlebars_helper!(InputCommentFull: |input: Json| input_comment(input, "#   "));
handlebars_helper!(YamlValue: |value: Json, indent: u64| {
    value
        .as_str()
        .map(|text| yaml_value(text, usize::try_from(indent).unwrap_or_default()))
        .unwrap_or_default()
});
handlebars_helper!(HasItems: |value: Json| has_items(value));
handlebars_helper!(AnyRequired: |inputs: Json| any_required(inputs));

/// `{{h N}}`: heading marks offset by the configured header level.
#[derive(Debug, Clone, Copy)]
pub struct HeadingHelper {
    base: u8,
}

impl HeadingHelper {
    /// Creates the helper for a starting header level.
    #[must_use]
    pub const fn new(level: HeaderLevel) -> Self {
        Self { base: level.get() }
    }

    /// Returns the `#` marks for a template-relative heading level.
    ///
    /// # Examples
    ///
    /// ```
    /// use action_docs_core::HeaderLevel;
    /// use action_docs_render::HeadingHelper;
    ///
    /// let helper = HeadingHelper::new(HeaderLevel::try_from(2).unwrap());
    /// assert_eq!(helper.marks(1), "##");
    /// assert_eq!(helper.marks(9), "######");
    /// ```
    #[must_use]
    pub fn marks(&self, level: u64) -> String {
        let depth = (u64::from(self.base) + level)
            .saturating_sub(1)
            .min(MAX_HEADING_DEPTH);
        "#".repeat(usize::try_from(depth).unwrap_or_default())
    }
}

impl HelperDef for HeadingHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        let level = h
            .param(0)
            .ok_or(RenderErrorReason::ParamNotFoundForIndex("h", 0))?
            .value()
            .as_u64()
            .ok_or_else(|| {
                RenderErrorReason::ParamTypeMismatchForName(
                    "h",
                    "0".to_string(),
                    "positive integer".to_string(),
                )
            })?;
        out.write(&self.marks(level))?;
        Ok(())
    }
}

/// `{{join items ", "}}`; the separator defaults to `,`.
#[derive(Debug, Clone, Copy)]
struct JoinHelper;

impl HelperDef for JoinHelper {
    fn call_inner<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
    ) -> Result<ScopedJson<'rc>, RenderError> {
        let separator = h
            .param(1)
            .and_then(|param| param.value().as_str())
            .unwrap_or(",");
        let joined = h
            .param(0)
            .map(PathAndJson::value)
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .map(display)
                    .collect::<Vec<_>>()
                    .join(separator)
            })
            .unwrap_or_default();
        Ok(ScopedJson::Derived(Value::String(joined)))
    }
}

/// Block helper that picks its main or `{{else}}` branch from the params.
#[derive(Debug, Clone, Copy)]
struct ConditionalBlock {
    test: fn(&[&Value]) -> bool,
}

impl HelperDef for ConditionalBlock {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        r: &'reg Handlebars<'reg>,
        ctx: &'rc Context,
        rc: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        let params: Vec<&Value> = h.params().iter().map(PathAndJson::value).collect();
        let branch = if (self.test)(&params) {
            h.template()
        } else {
            h.inverse()
        };
        match branch {
            Some(template) => template.render(r, ctx, rc, out),
            None => Ok(()),
        }
    }
}

fn register_as<H, F>(handlebars: &mut Handlebars<'_>, names: &[&str], make: F)
where
    H: HelperDef + Send + Sync + 'static,
    F: Fn() -> H,
{
    for name in names {
        handlebars.register_helper(name, Box::new(make()));
    }
}

/// Registers every README helper on `handlebars`.
pub fn register_helpers(handlebars: &mut Handlebars<'_>, header_level: HeaderLevel) {
    let heading = HeadingHelper::new(header_level);
    register_as(handlebars, &["h"], move || heading);
    register_as(handlebars, &["urlencode"], || UrlEncode);
    register_as(handlebars, &["escape_table_cell", "escapeTableCell"], || EscapeTableCell);
    register_as(handlebars, &["yes_no", "yesNo"], || YesNo);
    register_as(handlebars, &["format_default", "formatDefault"], || FormatDefault);
    register_as(handlebars, &["node_version", "nodeVersion"], || NodeVersion);
    register_as(handlebars, &["input_comment", "inputComment"], || InputComment);
    register_as(handlebars, &["input_comment_full", "inputCommentFull"], || InputCommentFull);
    register_as(handlebars, &["yaml_value", "yamlValue"], || YamlValue);
    register_as(handlebars, &["has_items"], || HasItems);
    register_as(handlebars, &["any_required"], || AnyRequired);
    register_as(handlebars, &["join"], || JoinHelper);

    register_as(
        handlebars,
        &["hasItems"],
        || ConditionalBlock {
            test: |params| params.first().is_some_and(|value| has_items(value)),
        },
    );
    register_as(
        handlebars,
        &["hasRequiredInputs"],
        || ConditionalBlock {
            test: |params| params.first().is_some_and(|value| any_required(value)),
        },
    );
    register_as(
        handlebars,
        &["isRuntime"],
        || ConditionalBlock {
            test: |params| matches!(params, [using, kind, ..] if using == kind),
        },
    );
}
