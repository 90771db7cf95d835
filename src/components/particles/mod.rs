//! Canvas particle layers: the network background and the cursor trail.
//!
//! Both layers share one pattern. A simulator owns a [`Surface`] and a particle
//! collection, and each call to [`Simulation::step`] clears the surface,
//! advances the particles and draws them. The browser components wire the
//! simulators to a canvas, viewport resizes, pointer moves and
//! `requestAnimationFrame`; everything else runs headlessly against
//! [`RecordingSurface`].
//!
//! # Example
//!
//! ```ignore
//! use rand::{SeedableRng, rngs::SmallRng};
//!
//! let mut field = BackgroundField::new(
//!     RecordingSurface::new(1000, 1000),
//!     FieldStyle::default(),
//!     SmallRng::seed_from_u64(1),
//! );
//! assert_eq!(field.particles().len(), 100);
//! run_frames(&mut field, &StopToken::new(), 60);
//! ```

mod component;
pub mod field;
pub mod frame;
pub mod style;
pub mod surface;
pub mod trail;

pub use component::{NetworkBackground, ParticleCursor};
pub use field::{BackgroundField, FieldParticle};
pub use frame::{AnimationLoop, Lifecycle, Simulation, StopToken, run_frames};
pub use style::{Color, FieldStyle, TrailStyle};
pub use surface::{CanvasSurface, DrawCommand, RecordingSurface, Surface};
pub use trail::{CursorTrail, TrailParticle};
