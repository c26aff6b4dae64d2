// Designated element identifiers the page must provide.

pub const ALERT_BUTTON: &str = "alertButton";
pub const OUTPUT: &str = "output";
pub const FAV_NUM: &str = "favNum";

pub const ADD: &str = "add";
pub const SUBTRACT: &str = "subtract";
pub const MULTIPLY: &str = "multiply";
pub const DIVIDE: &str = "divide";
pub const NUM1: &str = "num1";
pub const NUM2: &str = "num2";
pub const RESULT_VALUE: &str = "resultValue";

pub const FAHRENHEIT: &str = "F";
pub const CELSIUS: &str = "C";
