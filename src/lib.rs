//! Typed construction of Block Kit message payloads.
//!
//! Node types are declared once as data (`schema`); the runtime validates
//! every constructor argument against its declared field type and renders
//! instance trees to JSON.
//!
//! ```
//! use blockkit::{Args, schema::{BUTTON, ACTIONS, MESSAGE}};
//!
//! let button = BUTTON.construct(Args::new().arg("Approve").arg("approve"))?;
//! let actions = ACTIONS.construct(Args::new().arg(vec![button]))?;
//! let message = MESSAGE.construct(Args::new().arg("C024BE91L").kw("blocks", vec![actions]))?;
//! assert_eq!(message.render()["blocks"][0]["elements"][0]["type"], "button");
//! # Ok::<(), blockkit::ValidationError>(())
//! ```
pub mod describe;
pub mod error;
pub mod ir;
pub mod node;
pub mod node_type;
mod render;
pub mod schema;
pub mod validate;
pub mod value;

pub use error::ValidationError;
pub use ir::{Category, Field, FieldDefault, FieldType, Primitive};
pub use node::{Args, Node, Slot};
pub use node_type::{Coercion, NodeType, NodeTypeBuilder};
pub use validate::validate;
pub use value::Value;
