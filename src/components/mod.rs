//! ECS components for entities.
//!
//! Submodules overview:
//! - [`boxcollider`] – axis-aligned rectangular collider for collision detection
//! - [`category`] – what an entity is, as far as collision rules care
//! - [`collision`] – declarative category-pair collision rules
//! - [`dynamictext`] – text component for rendering variable strings
//! - [`inputcontrolled`] – direction-key velocities
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`persistent`] – marker for entities that survive clearing the field
//! - [`rigidbody`] – simple kinematic body storing velocity
//! - [`screenposition`] – screen-space position for UI elements
//! - [`sessionbinding`] – which session counter a HUD text shows
//! - [`shape`] – flat-colored primitive drawn instead of a texture
//! - [`sprite`] – 2D sprite rendering component
//! - [`timer`] – repeating timer that triggers an action
//! - [`weapon`] – projectile launcher
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod boxcollider;
pub mod category;
pub mod collision;
pub mod dynamictext;
pub mod inputcontrolled;
pub mod mapposition;
pub mod persistent;
pub mod rigidbody;
pub mod screenposition;
pub mod sessionbinding;
pub mod shape;
pub mod sprite;
pub mod timer;
pub mod weapon;
pub mod zindex;
