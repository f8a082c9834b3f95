use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::debug;

use super::{CallToolResult, Tool, ToolError, parse_arguments};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    fn symbol(self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Subtract => '-',
            Operation::Multiply => '×',
            Operation::Divide => '÷',
        }
    }

    fn apply(self, a: f64, b: f64) -> Result<f64, ToolError> {
        match self {
            Operation::Add => Ok(a + b),
            Operation::Subtract => Ok(a - b),
            Operation::Multiply => Ok(a * b),
            Operation::Divide if b == 0.0 => Err(ToolError::DivisionByZero),
            Operation::Divide => Ok(a / b),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CalculatorArguments {
    operation: Operation,
    a: f64,
    b: f64,
}

/// Binary arithmetic on two numbers.
pub struct CalculatorTool;

impl Tool for CalculatorTool {
    fn name(&self) -> &'static str {
        "calculator"
    }

    fn description(&self) -> &'static str {
        "Add, subtract, multiply or divide two numbers"
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "operation": {
                    "type": "string",
                    "enum": ["add", "subtract", "multiply", "divide"]
                },
                "a": { "type": "number" },
                "b": { "type": "number" }
            },
            "required": ["operation", "a", "b"],
            "additionalProperties": false
        })
    }

    fn call(&self, arguments: &Value) -> Result<CallToolResult, ToolError> {
        let CalculatorArguments { operation, a, b } = parse_arguments(arguments)?;
        let result = operation.apply(a, b)?;
        debug!(?operation, a, b, result, "calculated");

        Ok(CallToolResult::structured(
            format!("{a} {} {b} = {result}", operation.symbol()),
            json!({
                "operation": operation,
                "a": a,
                "b": b,
                "result": result
            }),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn computes_each_operation() {
        let cases = [
            ("add", 6.0),
            ("subtract", 2.0),
            ("multiply", 8.0),
            ("divide", 2.0),
        ];
        for (operation, expected) in cases {
            let result = CalculatorTool
                .call(&json!({ "operation": operation, "a": 4, "b": 2 }))
                .unwrap();
            let data = result.structured_content.unwrap();
            assert_eq!(data["result"].as_f64(), Some(expected), "{operation}");
            assert_eq!(data["operation"], operation);
        }
    }

    #[test]
    fn division_by_zero_is_rejected() {
        let err = CalculatorTool
            .call(&json!({ "operation": "divide", "a": 1, "b": 0 }))
            .unwrap_err();
        assert!(matches!(err, ToolError::DivisionByZero));
    }

    #[test]
    fn bad_arguments() {
        assert!(matches!(
            CalculatorTool.call(&json!({ "operation": "modulo", "a": 1, "b": 2 })),
            Err(ToolError::InvalidArguments(_))
        ));
        assert!(matches!(
            CalculatorTool.call(&json!({ "operation": "add", "a": "1", "b": 2 })),
            Err(ToolError::InvalidArguments(_))
        ));
        assert!(matches!(
            CalculatorTool.call(&json!({ "operation": "add", "a": 1 })),
            Err(ToolError::InvalidArguments(_))
        ));
    }

    #[test]
    fn transcript_line() {
        let result = CalculatorTool
            .call(&json!({ "operation": "multiply", "a": 1.5, "b": 4 }))
            .unwrap();
        assert_eq!(result.content[0].text, "1.5 × 4 = 6");
    }
}
