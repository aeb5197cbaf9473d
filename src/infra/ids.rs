use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::DrawId;

/// Простая генерация ID на основе монотонных счётчиков.
///
/// Один генератор делят оба движка (через `Arc`), поэтому счётчики атомарные
/// и методы берут `&self`.
#[derive(Debug)]
pub struct IdGenerator {
    draw_counter: AtomicU64,
    partition_counter: AtomicU64,
}

impl IdGenerator {
    /// Создать генератор с начальным значением 1 для всех сущностей.
    pub fn new() -> Self {
        Self {
            draw_counter: AtomicU64::new(1),
            partition_counter: AtomicU64::new(1),
        }
    }

    #[inline]
    pub fn next_draw_id(&self) -> DrawId {
        self.draw_counter.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn next_partition_id(&self) -> u64 {
        self.partition_counter.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
