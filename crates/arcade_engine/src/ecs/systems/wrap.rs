//! Screen wrap for the classic pipeline: moving entities leaving one edge
//! reappear on the opposite one.

use crate::ecs::components::Position;
use crate::ecs::{ComponentSet, EcsError, Query, System, SystemId, TickContext, World};

const MOVING: Query = Query::with(ComponentSet::POSITION.union(ComponentSet::VELOCITY));

/// Wraps positions into the current world bounds
#[derive(Debug, Default)]
pub struct WrapSystem;

impl System for WrapSystem {
    fn id(&self) -> SystemId {
        SystemId::Wrap
    }

    fn run(&mut self, world: &mut World, ctx: &mut TickContext<'_>) -> Result<usize, EcsError> {
        let (width, height) = (ctx.state.bounds.width, ctx.state.bounds.height);
        let moving = world.run_query(&MOVING);
        for &entity in &moving {
            if let Some(position) = world.get_mut::<Position>(entity)? {
                if position.x < 0.0 {
                    position.x = width;
                } else if position.x > width {
                    position.x = 0.0;
                }
                if position.y < 0.0 {
                    position.y = height;
                } else if position.y > height {
                    position.y = 0.0;
                }
            }
        }
        Ok(moving.len())
    }
}
