//! Component trait and the compile-time component registry
//!
//! Every component type is known up front and owns one bit of
//! [`ComponentSet`]. Presence checks and query filtering are bitmask
//! intersections; there is no runtime type probing.

use bitflags::bitflags;

bitflags! {
    /// Set of component kinds, one bit per registered component
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ComponentSet: u32 {
        /// [`Position`](super::components::Position)
        const POSITION = 1 << 0;
        /// [`Velocity`](super::components::Velocity)
        const VELOCITY = 1 << 1;
        /// [`Rotation`](super::components::Rotation)
        const ROTATION = 1 << 2;
        /// [`Input`](super::components::Input)
        const INPUT = 1 << 3;
        /// [`Collision`](super::components::Collision)
        const COLLISION = 1 << 4;
        /// [`Health`](super::components::Health)
        const HEALTH = 1 << 5;
        /// [`Mass`](super::components::Mass)
        const MASS = 1 << 6;
        /// [`Friction`](super::components::Friction)
        const FRICTION = 1 << 7;
        /// [`Hiter`](super::components::Hiter)
        const HITER = 1 << 8;
        /// [`Damage`](super::components::Damage)
        const DAMAGE = 1 << 9;
        /// [`Impulse`](super::components::Impulse)
        const IMPULSE = 1 << 10;
        /// [`Lifetime`](super::components::Lifetime)
        const LIFETIME = 1 << 11;
        /// [`CollisionDelay`](super::components::CollisionDelay)
        const COLLISION_DELAY = 1 << 12;
        /// [`RemoveMark`](super::components::RemoveMark)
        const REMOVE_MARK = 1 << 13;
        /// [`Player`](super::components::Player)
        const PLAYER = 1 << 14;
        /// [`Asteroid`](super::components::Asteroid)
        const ASTEROID = 1 << 15;
        /// [`Bullet`](super::components::Bullet)
        const BULLET = 1 << 16;
        /// [`Border`](super::components::Border)
        const BORDER = 1 << 17;
        /// [`Particle`](super::components::Particle)
        const PARTICLE = 1 << 18;
        /// [`Renderable`](super::components::Renderable)
        const RENDERABLE = 1 << 19;
        /// [`Weapon`](super::components::Weapon)
        const WEAPON = 1 << 20;
        /// [`Fade`](super::components::Fade)
        const FADE = 1 << 21;
        /// [`Grow`](super::components::Grow)
        const GROW = 1 << 22;
    }
}

impl Default for ComponentSet {
    fn default() -> Self {
        Self::empty()
    }
}

/// Marker trait for components
///
/// Implemented only through [`component_registry!`], which ties each type to
/// its bit and its column in the world's storage.
pub trait Component: Copy + Default + 'static {
    /// The bit this component owns
    const KIND: ComponentSet;

    /// The column holding this component's data
    #[doc(hidden)]
    fn column(columns: &super::components::Columns) -> &super::storage::ComponentArray<Self>;

    /// Mutable access to the column holding this component's data
    #[doc(hidden)]
    fn column_mut(
        columns: &mut super::components::Columns,
    ) -> &mut super::storage::ComponentArray<Self>;
}

/// Declare the full component registry: one column per component type plus
/// the `Component` impls that map each type to its bit.
macro_rules! component_registry {
    ($($ty:ident => $field:ident : $kind:ident),* $(,)?) => {
        /// Storage columns for every registered component
        #[derive(Debug, Clone)]
        pub struct Columns {
            $($field: $crate::ecs::storage::ComponentArray<$ty>,)*
        }

        impl Columns {
            pub(crate) fn with_capacity(capacity: usize) -> Self {
                Self {
                    $($field: $crate::ecs::storage::ComponentArray::new(capacity),)*
                }
            }

            /// Reset the data of every component in `kinds` at `slot`
            pub(crate) fn clear_slot(&mut self, slot: usize, kinds: $crate::ecs::ComponentSet) {
                $(
                    if kinds.contains($crate::ecs::ComponentSet::$kind) {
                        self.$field.take(slot);
                    }
                )*
            }
        }

        $(
            impl $crate::ecs::Component for $ty {
                const KIND: $crate::ecs::ComponentSet = $crate::ecs::ComponentSet::$kind;

                fn column(columns: &Columns) -> &$crate::ecs::storage::ComponentArray<Self> {
                    &columns.$field
                }

                fn column_mut(columns: &mut Columns) -> &mut $crate::ecs::storage::ComponentArray<Self> {
                    &mut columns.$field
                }
            }
        )*
    };
}

pub(crate) use component_registry;
