
use crate::{EmbeddedSession, MemorySurface, MountPoint};

use std::sync::{Arc, Mutex};

/// A fresh session at `generation` plus a mount point fenced to it
pub(crate) fn fenced_surface(
    generation: u64,
) -> (Arc<Mutex<EmbeddedSession>>, Arc<MemorySurface>, MountPoint) {
    let session = Arc::new(Mutex::new(EmbeddedSession {
        generation,
        ..EmbeddedSession::new()
    }));
    let surface = Arc::new(MemorySurface::new());
    let mount_point = MountPoint::new(generation, Arc::clone(&session), surface.clone());
    (session, surface, mount_point)
}
