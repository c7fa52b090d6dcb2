//! Schema-to-form dispatch
//!
//! Decides, per field, which native control is rendered and with which
//! attributes. The result is a plain data tree ([`FormPlan`]) that the
//! frontend maps one-to-one onto DOM elements.

mod control;
mod plan;

pub use control::{
    ChoiceGroup, ChoiceItem, FieldControl, FileControl, InputControl, SelectControl,
    TextAreaControl,
};
pub use plan::{plan_field, FieldPlan, FormPlan};
