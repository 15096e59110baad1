//! Call target trait - the polymorphic receiver of remote calls.
//!
//! Every object that can receive a remote call implements [`CallTarget`].
//! The registry records which target type a handler was written against and
//! checks membership explicitly at invoke time: the owner type is carried as
//! data, not expressed through dispatch. This is the defense-in-depth
//! backstop against cross-type handler confusion — identifiers already
//! differ per type because the type name is hashed into them.
//!
//! # Widening for layered targets
//!
//! `is_instance_of` defaults to an exact type match. A target built on top
//! of another target type widens the check so handlers registered against
//! the inner type keep working:
//!
//! ```
//! use std::any::{Any, TypeId};
//! use wirecall::target::CallTarget;
//!
//! struct Turret;
//! impl CallTarget for Turret {
//!     fn as_any(&self) -> &dyn Any { self }
//!     fn as_any_mut(&mut self) -> &mut dyn Any { self }
//! }
//!
//! struct AutoTurret {
//!     turret: Turret,
//! }
//! impl CallTarget for AutoTurret {
//!     fn as_any(&self) -> &dyn Any { self }
//!     fn as_any_mut(&mut self) -> &mut dyn Any { self }
//!     fn is_instance_of(&self, owner: TypeId) -> bool {
//!         owner == TypeId::of::<AutoTurret>() || self.turret.is_instance_of(owner)
//!     }
//! }
//!
//! let auto = AutoTurret { turret: Turret };
//! assert!(auto.is_instance_of(TypeId::of::<Turret>()));
//! ```

use std::any::{Any, TypeId};

/// A receiver of remote calls.
///
/// Handlers are invoked with `&mut dyn CallTarget` and downcast to their
/// concrete type themselves; the registry only verifies membership via
/// [`is_instance_of`](CallTarget::is_instance_of) before handing over.
pub trait CallTarget: Any {
    /// View as `&dyn Any` for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// View as `&mut dyn Any` for downcasting.
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Whether this instance may receive calls registered against `owner`.
    ///
    /// Defaults to an exact type match. Targets that embed another target
    /// type override this to also claim the embedded type.
    fn is_instance_of(&self, owner: TypeId) -> bool {
        self.as_any().type_id() == owner
    }
}
