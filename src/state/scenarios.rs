//! Conversation flow definitions
//! 
//! Each flow is an explicit state machine. Every step variant carries exactly
//! the answers collected so far, so a flow can only reach its commit step with
//! all of its fields filled in.

/// Label of the "add" adjustment direction
pub const ADD_LABEL: &str = "➕ Sumar";
/// Label of the "subtract" adjustment direction
pub const SUBTRACT_LABEL: &str = "➖ Restar";

/// Label of the brand filter in the stock lookup
pub const BY_BRAND_LABEL: &str = "🔍 Por marca";
/// Label of the code filter in the stock lookup
pub const BY_CODE_LABEL: &str = "🔎 Por código";
/// Label that leaves the stock lookup
pub const BACK_LABEL: &str = "⬅️ Volver";

/// An active conversation flow and its current step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    Register(RegisterStep),
    Lookup(LookupStep),
    Adjust(AdjustStep),
    Move(MoveStep),
}

/// Box registration: code, brand, color, quantity, location
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterStep {
    Code,
    Brand { code: String },
    Color { code: String, brand: String },
    Quantity { code: String, brand: String, color: String },
    Location { code: String, brand: String, color: String, quantity: i64 },
}

/// Filtered stock lookup: filter mode, then search term
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupStep {
    Mode,
    Term { mode: LookupMode },
}

/// Stock adjustment: code, direction, magnitude
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdjustStep {
    Code,
    Direction { code: String },
    Amount { code: String, direction: Direction, label: String },
}

/// Box relocation: code, new location
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveStep {
    Code,
    Location { code: String },
}

/// How the lookup search term is matched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupMode {
    /// Brand contains the term
    Brand,
    /// Code equals the term
    Code,
}

impl LookupMode {
    /// Any label mentioning "marca" filters by brand; everything else by code
    pub fn from_label(label: &str) -> Self {
        if label.to_lowercase().contains("marca") {
            LookupMode::Brand
        } else {
            LookupMode::Code
        }
    }
}

/// Direction of a stock adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Add,
    Subtract,
}

impl Direction {
    /// Labels containing "Sumar" add; any other reply subtracts
    pub fn from_label(label: &str) -> Self {
        if label.contains("Sumar") {
            Direction::Add
        } else {
            Direction::Subtract
        }
    }

    /// Signed change applied to the stored quantity for a typed magnitude
    pub fn delta(self, magnitude: i64) -> i64 {
        match self {
            Direction::Add => magnitude,
            Direction::Subtract => -magnitude,
        }
    }
}

impl Flow {
    /// Flow identifier used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Flow::Register(_) => "register",
            Flow::Lookup(_) => "lookup",
            Flow::Adjust(_) => "adjust",
            Flow::Move(_) => "move",
        }
    }

    /// Step identifier used in logs
    pub fn step_name(&self) -> &'static str {
        match self {
            Flow::Register(step) => match step {
                RegisterStep::Code => "code",
                RegisterStep::Brand { .. } => "brand",
                RegisterStep::Color { .. } => "color",
                RegisterStep::Quantity { .. } => "quantity",
                RegisterStep::Location { .. } => "location",
            },
            Flow::Lookup(step) => match step {
                LookupStep::Mode => "mode",
                LookupStep::Term { .. } => "term",
            },
            Flow::Adjust(step) => match step {
                AdjustStep::Code => "code",
                AdjustStep::Direction { .. } => "direction",
                AdjustStep::Amount { .. } => "amount",
            },
            Flow::Move(step) => match step {
                MoveStep::Code => "code",
                MoveStep::Location { .. } => "location",
            },
        }
    }
}
