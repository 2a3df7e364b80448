//! Local (non-`Send`) task spawning.

#[cfg(test)]
#[path = "task_test.rs"]
mod task_test;

use futures::future::LocalBoxFuture;

pub trait Spawner {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>);
}

/// Spawns onto the browser microtask queue via `wasm-bindgen-futures`.
///
/// No Leptos view is mounted, so the Leptos executor is never initialized
/// and `leptos::task::spawn_local` would drop the task.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSpawner;

#[cfg(feature = "hydrate")]
impl Spawner for BrowserSpawner {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        wasm_bindgen_futures::spawn_local(task);
    }
}

#[cfg(test)]
impl Spawner for futures::executor::LocalSpawner {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        use futures::task::LocalSpawnExt;

        if let Err(e) = self.spawn_local(task) {
            panic!("local pool shut down: {e}");
        }
    }
}
