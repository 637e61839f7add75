// ===== Политики обслуживания файла =====

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Policy {
    #[default]
    None,
    /// Переключиться на файл со следующим числовым суффиксом
    Rotate,
    /// Обрезать текущий файл
    Overwrite,
}

/// Что сделать с файлом перед очередной записью.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Nothing,
    Rotate,
    Overwrite,
}

/// Счётчик байтов, записанных в текущий открытый файл.
#[derive(Debug, Default, Clone, Copy)]
pub struct ByteCounter(u64);

impl ByteCounter {
    pub fn add(&mut self, n: usize) {
        self.0 = self.0.saturating_add(n as u64);
    }

    pub fn reset(&mut self) {
        self.0 = 0;
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicyEngine {
    policy: Policy,
    threshold: u64,
}

impl PolicyEngine {
    pub fn new(policy: Policy, threshold: u64) -> Self {
        PolicyEngine { policy, threshold }
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    pub fn threshold(&self) -> u64 {
        self.threshold
    }

    // Порог 0 срабатывает на каждой записи.
    pub fn decide(&self, written: u64) -> Action {
        if written < self.threshold {
            return Action::Nothing;
        }
        match self.policy {
            Policy::None => Action::Nothing,
            Policy::Rotate => Action::Rotate,
            Policy::Overwrite => Action::Overwrite,
        }
    }
}
