//! Advances fade and grow ramps

use crate::ecs::components::{Fade, Grow};
use crate::ecs::{ComponentSet, EcsError, Query, System, SystemId, TickContext, World};

const FADING: Query = Query::with(ComponentSet::FADE);
const GROWING: Query = Query::with(ComponentSet::GROW);

/// Moves every visual ramp forward by the tick's duration
#[derive(Debug, Default)]
pub struct VfxSystem;

impl System for VfxSystem {
    fn id(&self) -> SystemId {
        SystemId::Vfx
    }

    fn run(&mut self, world: &mut World, ctx: &mut TickContext<'_>) -> Result<usize, EcsError> {
        let seconds = ctx.seconds();
        let fading = world.run_query(&FADING);
        for &entity in &fading {
            if let Some(fade) = world.get_mut::<Fade>(entity)? {
                fade.elapsed += seconds;
            }
        }
        let growing = world.run_query(&GROWING);
        for &entity in &growing {
            if let Some(grow) = world.get_mut::<Grow>(entity)? {
                grow.elapsed += seconds;
            }
        }
        Ok(fading.len() + growing.len())
    }
}
