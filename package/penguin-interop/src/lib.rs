#![deny(clippy::all)]
#![warn(clippy::pedantic, clippy::nursery)]

use std::str::FromStr;
use js_sys::Array;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::console;
use penguin_ast::dialect::{DialectConfig, DialectPreset};
use penguin_runtime::{ExecutionResult, Interpreter};

#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

struct Timer<'a> {
    name: &'a str
}

impl<'a> Timer<'a> {
    fn new(name: &'a str) -> Self {
        console::time_with_label(name);
        Self { name }
    }
}

impl Drop for Timer<'_> {
    fn drop(&mut self) {
        console::time_end_with_label(self.name);
    }
}

#[derive(Error, Debug, Eq, PartialEq)]
#[error("unknown dialect `{0}`, expected one of: print-only, variables, input, concatenation, full")]
pub struct UnknownDialect(String);

fn dialect_by_name(name: &str) -> Result<DialectConfig, UnknownDialect> {
    DialectPreset::from_str(name)
        .map(DialectConfig::from)
        .map_err(|_| UnknownDialect(name.to_string()))
}

/// The capability object a page script can pass instead of a preset name.
#[derive(Deserialize, Debug, Eq, PartialEq, Copy, Clone)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct Capabilities {
    allow_assignment: bool,
    allow_print: bool,
    allow_input: bool,
    allow_concatenation: bool,
    #[serde(default)]
    allow_booleans: bool,
    #[serde(default)]
    reject_empty_source: bool,
}

impl From<Capabilities> for DialectConfig {
    fn from(c: Capabilities) -> Self {
        Self {
            allow_assignment: c.allow_assignment,
            allow_print: c.allow_print,
            allow_input: c.allow_input,
            allow_concatenation: c.allow_concatenation,
            allow_booleans: c.allow_booleans,
            reject_empty_source: c.reject_empty_source,
        }
    }
}

fn dialect_from_capabilities(json: &str) -> Result<DialectConfig, serde_json::Error> {
    serde_json::from_str::<Capabilities>(json).map(DialectConfig::from)
}

/// Owned by one lesson widget on the page.
#[wasm_bindgen]
pub struct InterpreterHandle {
    interpreter: Interpreter,
}

/// # Errors
/// `dialect` does not name a preset.
#[wasm_bindgen(js_name = createInterpreter)]
pub fn create_interpreter(dialect: &str) -> Result<InterpreterHandle, JsValue> {
    init_panic_hook();
    dialect_by_name(dialect)
        .map(|dialect| InterpreterHandle { interpreter: Interpreter::new(dialect) })
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Like [`create_interpreter`], but takes the capabilities as JSON, e.g.
/// `{"allowAssignment":true,"allowPrint":true,"allowInput":false,"allowConcatenation":false}`.
///
/// # Errors
/// `capabilities` is not such an object.
#[wasm_bindgen(js_name = createInterpreterWithCapabilities)]
pub fn create_interpreter_with_capabilities(capabilities: &str) -> Result<InterpreterHandle, JsValue> {
    init_panic_hook();
    dialect_from_capabilities(capabilities)
        .map(|dialect| InterpreterHandle { interpreter: Interpreter::new(dialect) })
        .map_err(|e| JsValue::from_str(&format!("invalid capabilities: {e}")))
}

#[wasm_bindgen]
impl InterpreterHandle {
    /// Runs `source`. `inputs` holds the simulated answers; non-string items
    /// are skipped. Returns the result as JSON.
    pub fn execute(&self, source: &str, inputs: &Array) -> String {
        let _t = Timer::new("penguin.execute");
        let inputs = inputs.iter().filter_map(|v| v.as_string()).collect::<Vec<_>>();
        let result = {
            let _t = Timer::new("penguin.execute.run");
            self.interpreter.execute(source, inputs)
        };

        to_json(&result)
    }

    /// Makes a program without statements an error for this widget.
    #[wasm_bindgen(js_name = rejectEmptySource)]
    pub fn reject_empty_source(&mut self) {
        let dialect = self.interpreter.dialect().rejecting_empty_source();
        self.interpreter = self.interpreter.clone().with_dialect(dialect);
    }
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct ResultJson<'a> {
    success: bool,
    output_text: String,
    display_text: String,
    /// In first-assignment order.
    variables: Vec<VariableJson<'a>>,
    error_message: Option<String>,
    error_kind: Option<&'a str>,
    error_line: Option<usize>,
}

#[derive(Serialize, Debug)]
struct VariableJson<'a> {
    name: &'a str,
    value: &'a str,
    kind: &'a str,
}

impl<'a> From<&'a ExecutionResult> for ResultJson<'a> {
    fn from(result: &'a ExecutionResult) -> Self {
        let error = result.first_error();
        Self {
            success: result.success,
            output_text: result.output_text(),
            display_text: result.display_text(),
            variables: result
                .variables
                .iter()
                .map(|v| VariableJson { name: &v.name, value: &v.display, kind: v.kind.as_ref() })
                .collect(),
            error_message: result.error_message(),
            error_kind: error.map(|e| e.kind.as_ref()),
            error_line: error.and_then(|e| e.line).map(|l| l.get()),
        }
    }
}

fn to_json(result: &ExecutionResult) -> String {
    serde_json::to_string(&ResultJson::from(result))
        .unwrap_or_else(|e| serialization_failure(&e.to_string()))
}

fn serialization_failure(reason: &str) -> String {
    serde_json::json!({
        "success": false,
        "errorMessage": format!("serialization error: {reason}"),
        "errorKind": "Unclassified",
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use serde_json::Value;
    use penguin_ast::dialect::DialectConfig;
    use penguin_runtime::Interpreter;
    use crate::{dialect_by_name, dialect_from_capabilities, serialization_failure, to_json, UnknownDialect};

    fn run(dialect: DialectConfig, source: &str, inputs: &[&str]) -> Value {
        let result = Interpreter::new(dialect).execute(source, inputs.iter().copied());
        serde_json::from_str(&to_json(&result)).unwrap()
    }

    #[test]
    fn dialect_names() {
        assert_eq!(dialect_by_name("print-only"), Ok(DialectConfig::print_only()));
        assert_eq!(dialect_by_name("full"), Ok(DialectConfig::full()));
        assert_eq!(dialect_by_name("python"), Err(UnknownDialect("python".to_string())));
    }

    #[test]
    fn capability_object() {
        let dialect = dialect_from_capabilities(
            r#"{"allowAssignment":true,"allowPrint":true,"allowInput":false,"allowConcatenation":true}"#,
        )
        .unwrap();
        assert_eq!(dialect, DialectConfig::concatenation());

        let dialect = dialect_from_capabilities(
            r#"{"allowAssignment":true,"allowPrint":true,"allowInput":true,"allowConcatenation":true,"allowBooleans":true}"#,
        )
        .unwrap();
        assert_eq!(dialect, DialectConfig::full());

        assert!(dialect_from_capabilities(r#"{"allowPrint":true}"#).is_err());
        assert!(dialect_from_capabilities(r#"{"allowAssignment":true,"allowPrint":true,"allowInput":false,"allowConcatenation":false,"allowLoops":true}"#).is_err());
    }

    #[test]
    fn capabilities_gate_statements() {
        let dialect = dialect_from_capabilities(
            r#"{"allowAssignment":false,"allowPrint":true,"allowInput":false,"allowConcatenation":false}"#,
        )
        .unwrap();
        let json = run(dialect, "x = 1", &[]);
        assert_eq!(json["success"], false);
        assert_eq!(json["errorKind"], "UnsupportedStatement");
    }

    #[test]
    fn serialization_failure_is_valid_json() {
        let json: Value = serde_json::from_str(&serialization_failure(r#"bad "quote" and \ backslash"#)).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["errorKind"], "Unclassified");
        assert_eq!(json["errorMessage"], r#"serialization error: bad "quote" and \ backslash"#);
    }

    #[test]
    fn success_shape() {
        let json = run(DialectConfig::input(), "name = input(\"Name? \")\nprint(name)", &["Alex"]);
        assert_eq!(json["success"], true);
        assert_eq!(json["outputText"], "Name? Alex\nAlex");
        assert_eq!(json["variables"][0]["name"], "name");
        assert_eq!(json["variables"][0]["value"], "\"Alex\"");
        assert_eq!(json["variables"][0]["kind"], "string");
        assert!(json["errorMessage"].is_null());
        assert!(json["errorKind"].is_null());
    }

    #[test]
    fn failure_shape() {
        let json = run(DialectConfig::full(), "x = 1\nprint(score)", &[]);
        assert_eq!(json["success"], false);
        assert_eq!(json["errorKind"], "UndefinedVariable");
        assert_eq!(json["errorLine"], 2);
        assert!(json["errorMessage"].as_str().unwrap().starts_with("Line 2: "));
    }

    #[test]
    fn silent_run_has_placeholder() {
        let json = run(DialectConfig::full(), "x = 1", &[]);
        assert_eq!(json["outputText"], "");
        assert_eq!(json["displayText"], "Code ran successfully (no output)");
    }
}
