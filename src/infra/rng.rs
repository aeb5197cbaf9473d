use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::engine::RandomSource;

/// Боевой RNG: потоковый генератор из `rand`.
///
/// Криптостойкость не требуется и не обещается: нужна только
/// равномерность по текущему пулу.
#[derive(Clone, Debug, Default)]
pub struct SystemRng;

impl RandomSource for SystemRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut rand::thread_rng());
    }

    fn index(&mut self, upper: usize) -> usize {
        rand::thread_rng().gen_range(0..upper)
    }
}

/// Детерминированный RNG для тестов и реплея.
/// Одинаковый seed → одинаковые розыгрыши и группы.
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: StdRng,
}

impl DeterministicRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    /// Отдельный поток из того же seed (для барабана, чтобы не делить
    /// состояние с финальным выбором).
    pub fn fork(&mut self) -> Self {
        Self::from_seed(self.inner.gen())
    }
}

impl RandomSource for DeterministicRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    fn index(&mut self, upper: usize) -> usize {
        self.inner.gen_range(0..upper)
    }
}

/// RNG, выбранный конфигурацией. Есть seed, значит детерминированный, иначе системный.
#[derive(Clone, Debug)]
pub enum ConfiguredRng {
    System(SystemRng),
    Seeded(DeterministicRng),
}

impl ConfiguredRng {
    /// Пара независимых потоков: (финальный выбор, барабан).
    pub fn pair(seed: Option<u64>) -> (Self, Self) {
        match seed {
            Some(seed) => {
                let mut selection = DeterministicRng::from_seed(seed);
                let decoy = selection.fork();
                (Self::Seeded(selection), Self::Seeded(decoy))
            }
            None => (Self::System(SystemRng), Self::System(SystemRng)),
        }
    }
}

impl RandomSource for ConfiguredRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        match self {
            ConfiguredRng::System(rng) => rng.shuffle(slice),
            ConfiguredRng::Seeded(rng) => rng.shuffle(slice),
        }
    }

    fn index(&mut self, upper: usize) -> usize {
        match self {
            ConfiguredRng::System(rng) => rng.index(upper),
            ConfiguredRng::Seeded(rng) => rng.index(upper),
        }
    }
}
