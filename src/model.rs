//! Page behaviour as plain data.
//! Each handler takes the input text it needs and returns the effects the
//! page should perform, in order. Nothing here touches the DOM.

use crate::config::Profile;
use crate::ids;
use crate::numeric::{format_number, parse_float};

pub const ENTER_KEY: &str = "Enter";

pub const GREETING_ALERT: &str = "Hello World";
pub const GREETING_LOG: &str = "My first JavaScript assignment";
pub const GREETING_OUTPUT: &str = "I just modified this element with JavaScript";

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Modal dialog.
    Alert(String),
    /// Informational console entry.
    Log(String),
    /// Overwrites the content of a designated element.
    SetText { target: &'static str, text: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Operation::Add => "Sum",
            Operation::Subtract => "Difference",
            Operation::Multiply => "Product",
            Operation::Divide => "Quotient",
        }
    }

    /// Plain IEEE arithmetic; a zero divisor gives an infinity or NaN.
    pub fn apply(self, x: f64, y: f64) -> f64 {
        match self {
            Operation::Add => x + y,
            Operation::Subtract => x - y,
            Operation::Multiply => x * y,
            Operation::Divide => x / y,
        }
    }

    /// Id of the button that triggers this operation.
    pub fn element_id(self) -> &'static str {
        match self {
            Operation::Add => ids::ADD,
            Operation::Subtract => ids::SUBTRACT,
            Operation::Multiply => ids::MULTIPLY,
            Operation::Divide => ids::DIVIDE,
        }
    }
}

/// Scale of the value typed into a temperature field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scale {
    Fahrenheit,
    Celsius,
}

impl Scale {
    pub fn element_id(self) -> &'static str {
        match self {
            Scale::Fahrenheit => ids::FAHRENHEIT,
            Scale::Celsius => ids::CELSIUS,
        }
    }

    /// Converts a reading on this scale to the other one.
    pub fn convert(self, value: f64) -> f64 {
        match self {
            Scale::Fahrenheit => fahrenheit_to_celsius(value),
            Scale::Celsius => celsius_to_fahrenheit(value),
        }
    }

    fn target_name(self) -> &'static str {
        match self {
            Scale::Fahrenheit => "Celsius",
            Scale::Celsius => "Fahrenheit",
        }
    }

    fn target_unit(self) -> &'static str {
        match self {
            Scale::Fahrenheit => "°C",
            Scale::Celsius => "°F",
        }
    }
}

pub fn fahrenheit_to_celsius(f: f64) -> f64 {
    (f - 32.0) * 5.0 / 9.0
}

pub fn celsius_to_fahrenheit(c: f64) -> f64 {
    c * 9.0 / 5.0 + 32.0
}

pub fn greeting_sentence(profile: &Profile, favorite: f64) -> String {
    format!(
        "My name is {}, I am {} years old, and my favorite number is {}.",
        profile.name,
        profile.age,
        format_number(favorite)
    )
}

/// Click on the alert button.
pub fn greet(fav_num: &str, profile: &Profile) -> Vec<Effect> {
    vec![
        Effect::Alert(GREETING_ALERT.to_string()),
        Effect::Log(GREETING_LOG.to_string()),
        Effect::SetText {
            target: ids::OUTPUT,
            text: GREETING_OUTPUT.to_string(),
        },
        Effect::Log(greeting_sentence(profile, parse_float(fav_num))),
    ]
}

pub fn calculation_message(op: Operation, x: f64, y: f64) -> String {
    format!("{}: {}", op.label(), format_number(op.apply(x, y)))
}

/// Click on one of the calculator buttons. Both operands are parsed here,
/// immediately before use.
pub fn calculate(op: Operation, num1: &str, num2: &str) -> Vec<Effect> {
    let message = calculation_message(op, parse_float(num1), parse_float(num2));
    vec![
        Effect::SetText {
            target: ids::RESULT_VALUE,
            text: message.clone(),
        },
        Effect::Log(message),
    ]
}

pub fn conversion_message(scale: Scale, value: f64) -> String {
    format!(
        "Temperature in {}: {}{}",
        scale.target_name(),
        format_number(scale.convert(value)),
        scale.target_unit()
    )
}

/// Keydown in a temperature field. Only Enter does anything.
pub fn convert_on_key(scale: Scale, key: &str, value: &str) -> Vec<Effect> {
    if key != ENTER_KEY {
        return Vec::new();
    }
    vec![Effect::Alert(conversion_message(scale, parse_float(value)))]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(effects: &[Effect], target: &str) -> Option<String> {
        effects.iter().find_map(|e| match e {
            Effect::SetText { target: t, text } if *t == target => Some(text.clone()),
            _ => None,
        })
    }

    #[test]
    fn operations_match_float_arithmetic() {
        let pairs = [(10.0, 4.0), (-3.5, 2.0), (0.1, 0.2), (1e300, 1e300)];
        for (x, y) in pairs {
            assert_eq!(Operation::Add.apply(x, y), x + y);
            assert_eq!(Operation::Subtract.apply(x, y), x - y);
            assert_eq!(Operation::Multiply.apply(x, y), x * y);
            assert_eq!(Operation::Divide.apply(x, y), x / y);
        }
    }

    #[test]
    fn divide_by_zero_yields_sentinels() {
        assert_eq!(Operation::Divide.apply(1.0, 0.0), f64::INFINITY);
        assert_eq!(Operation::Divide.apply(-1.0, 0.0), f64::NEG_INFINITY);
        assert!(Operation::Divide.apply(0.0, 0.0).is_nan());
        assert_eq!(calculation_message(Operation::Divide, 5.0, 0.0), "Quotient: Infinity");
    }

    #[test]
    fn calculator_scenario() {
        let expected = [
            (Operation::Add, "Sum: 14"),
            (Operation::Subtract, "Difference: 6"),
            (Operation::Multiply, "Product: 40"),
            (Operation::Divide, "Quotient: 2.5"),
        ];
        for (op, want) in expected {
            let effects = calculate(op, "10", "4");
            assert_eq!(text_of(&effects, ids::RESULT_VALUE).as_deref(), Some(want));
            assert_eq!(effects[1], Effect::Log(want.to_string()));
        }
    }

    #[test]
    fn add_uses_freshly_read_operands() {
        let first = calculate(Operation::Add, "1", "2");
        let second = calculate(Operation::Add, "7", "8");
        assert_eq!(text_of(&first, ids::RESULT_VALUE).as_deref(), Some("Sum: 3"));
        assert_eq!(text_of(&second, ids::RESULT_VALUE).as_deref(), Some("Sum: 15"));
    }

    #[test]
    fn calculator_labels_prefix_every_result() {
        for op in Operation::ALL {
            let effects = calculate(op, "abc", "");
            let text = text_of(&effects, ids::RESULT_VALUE).unwrap();
            assert_eq!(text, format!("{}: NaN", op.label()));
        }
    }

    #[test]
    fn temperature_fixed_points() {
        assert_eq!(fahrenheit_to_celsius(32.0), 0.0);
        assert_eq!(fahrenheit_to_celsius(212.0), 100.0);
        assert_eq!(celsius_to_fahrenheit(0.0), 32.0);
        assert_eq!(celsius_to_fahrenheit(100.0), 212.0);
        assert_eq!(fahrenheit_to_celsius(-40.0), -40.0);
        assert_eq!(celsius_to_fahrenheit(-40.0), -40.0);
    }

    #[test]
    fn enter_shows_conversion_dialog() {
        assert_eq!(
            convert_on_key(Scale::Fahrenheit, "Enter", "212"),
            vec![Effect::Alert("Temperature in Celsius: 100°C".into())]
        );
        assert_eq!(
            convert_on_key(Scale::Celsius, "Enter", "100"),
            vec![Effect::Alert("Temperature in Fahrenheit: 212°F".into())]
        );
        assert_eq!(
            convert_on_key(Scale::Fahrenheit, "Enter", "50"),
            vec![Effect::Alert("Temperature in Celsius: 10°C".into())]
        );
    }

    #[test]
    fn other_keys_do_nothing() {
        for key in ["a", "1", "Tab", "enter", "NumpadEnter", " ", ""] {
            assert!(convert_on_key(Scale::Fahrenheit, key, "212").is_empty());
            assert!(convert_on_key(Scale::Celsius, key, "100").is_empty());
        }
    }

    #[test]
    fn non_numeric_temperature_surfaces_nan() {
        assert_eq!(
            convert_on_key(Scale::Celsius, "Enter", "warm"),
            vec![Effect::Alert("Temperature in Fahrenheit: NaN°F".into())]
        );
    }

    #[test]
    fn greeting_effects_in_order() {
        let profile = Profile::default();
        let effects = greet("7", &profile);
        assert_eq!(
            effects,
            vec![
                Effect::Alert("Hello World".into()),
                Effect::Log("My first JavaScript assignment".into()),
                Effect::SetText {
                    target: ids::OUTPUT,
                    text: "I just modified this element with JavaScript".into(),
                },
                Effect::Log(
                    "My name is Gemma Liang, I am 18 years old, and my favorite number is 7."
                        .into()
                ),
            ]
        );
    }

    #[test]
    fn greeting_with_bad_number_logs_nan() {
        let profile = Profile {
            name: "Ada".into(),
            age: 36,
        };
        let effects = greet("", &profile);
        assert_eq!(
            effects.last(),
            Some(&Effect::Log(
                "My name is Ada, I am 36 years old, and my favorite number is NaN.".into()
            ))
        );
    }
}
