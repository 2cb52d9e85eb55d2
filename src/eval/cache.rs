// eval/cache.rs — LRU frame cache with deterministic scene hashing
//
// Caches rendered frames keyed by a hash of the scene description plus
// the frame parameters. Thread-safe via Mutex. Frames are stored
// behind `Arc` so cache hits return a reference-count bump instead of
// cloning a multi-MB pixel buffer.
//
// Time is hashed at raw f32 bit precision; callers that want temporal
// reuse quantize the clock before building params.

use crate::eval::frame::{render_frame, FrameResult};
use crate::scene::{FrameParams, Scene, SceneSpec};
use lru::LruCache;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

/// Content-addressable frame cache.
/// Key = hash(scene JSON + params), value = `Arc<FrameResult>`.
pub struct FrameCache {
    frames: Mutex<LruCache<u64, Arc<FrameResult>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

/// Hit/miss counters, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

impl FrameCache {
    pub fn new(capacity: usize) -> Self {
        let cap = NonZeroUsize::new(capacity.max(1)).unwrap_or(NonZeroUsize::MIN);
        Self {
            frames: Mutex::new(LruCache::new(cap)),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Deterministic key over the scene's serialized structure and the
    /// frame parameters. f32 params are hashed by their raw bits.
    pub fn key(spec: &SceneSpec, params: &FrameParams) -> u64 {
        let mut hasher = DefaultHasher::new();
        // serde_json's map is ordered, so the serialized structure is
        // stable for equal scenes.
        match serde_json::to_value(spec) {
            Ok(value) => hash_value(&value, &mut hasher),
            Err(_) => "unserializable-scene".hash(&mut hasher),
        }
        params.width.hash(&mut hasher);
        params.height.hash(&mut hasher);
        params.time.to_bits().hash(&mut hasher);
        params.pointer[0].to_bits().hash(&mut hasher);
        params.pointer[1].to_bits().hash(&mut hasher);
        (params.clamp == crate::eval::color::ClampMode::Strict).hash(&mut hasher);
        hasher.finish()
    }

    /// Fetch a cached frame. Hits return a cheap `Arc` clone.
    pub fn get(&self, key: u64) -> Option<Arc<FrameResult>> {
        let found = self.frames.lock().unwrap().get(&key).cloned();
        match &found {
            Some(_) => self.hits.fetch_add(1, Ordering::Relaxed),
            None => self.misses.fetch_add(1, Ordering::Relaxed),
        };
        found
    }

    pub fn put(&self, key: u64, frame: FrameResult) -> Arc<FrameResult> {
        let arc = Arc::new(frame);
        self.frames.lock().unwrap().put(key, Arc::clone(&arc));
        arc
    }

    /// Render through the cache: compile hit → render → insert.
    pub fn render(
        &self,
        spec: &SceneSpec,
        scene: &Scene,
        params: &FrameParams,
    ) -> Arc<FrameResult> {
        let key = Self::key(spec, params);
        if let Some(frame) = self.get(key) {
            return frame;
        }
        self.put(key, render_frame(scene, params))
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }

    pub fn clear(&self) {
        self.frames.lock().unwrap().clear();
    }
}

/// Hash a JSON value structurally. Numbers hash by f64 bits so that
/// equal scenes always produce equal keys.
fn hash_value(value: &serde_json::Value, hasher: &mut DefaultHasher) {
    use serde_json::Value;
    match value {
        Value::Null => 0u8.hash(hasher),
        Value::Bool(b) => {
            1u8.hash(hasher);
            b.hash(hasher);
        }
        Value::Number(n) => {
            2u8.hash(hasher);
            n.as_f64().unwrap_or(0.0).to_bits().hash(hasher);
        }
        Value::String(s) => {
            3u8.hash(hasher);
            s.hash(hasher);
        }
        Value::Array(items) => {
            4u8.hash(hasher);
            items.len().hash(hasher);
            for item in items {
                hash_value(item, hasher);
            }
        }
        Value::Object(map) => {
            5u8.hash(hasher);
            map.len().hash(hasher);
            for (k, v) in map {
                k.hash(hasher);
                hash_value(v, hasher);
            }
        }
    }
}
