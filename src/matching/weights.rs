/// Composite weights for the overall score.
/// Skills dominate; compensation matters least because both sides routinely
/// leave salary fields blank.
pub const COMPOSITE_WEIGHTS: Weights = Weights {
    skills: 0.40,
    experience: 0.25,
    location: 0.20,
    salary: 0.15,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub skills: f64,
    pub experience: f64,
    pub location: f64,
    pub salary: f64,
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.skills + self.experience + self.location + self.salary
    }
}
