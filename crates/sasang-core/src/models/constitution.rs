use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// One of the four Sasang constitutions.
///
/// Declaration order is the canonical order: every iteration over
/// constitutions and every tie-break follows it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Constitution {
    Taeyang,
    Soyang,
    Taeeum,
    Soeum,
}

impl Constitution {
    pub const ALL: [Constitution; 4] = [
        Constitution::Taeyang,
        Constitution::Soyang,
        Constitution::Taeeum,
        Constitution::Soeum,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Constitution::Taeyang => "taeyang",
            Constitution::Soyang => "soyang",
            Constitution::Taeeum => "taeeum",
            Constitution::Soeum => "soeum",
        }
    }

    pub fn korean_name(self) -> &'static str {
        match self {
            Constitution::Taeyang => "태양인",
            Constitution::Soyang => "소양인",
            Constitution::Taeeum => "태음인",
            Constitution::Soeum => "소음인",
        }
    }

    /// Short characterization shown next to a diagnosis.
    pub fn description(self) -> &'static str {
        match self {
            Constitution::Taeyang => {
                "Large lungs, small liver. Intuitive, decisive, fair-minded."
            }
            Constitution::Soyang => {
                "Large spleen, small kidneys. Emotional, quick, sociable."
            }
            Constitution::Taeeum => {
                "Large liver, small lungs. Steady, persistent, values propriety."
            }
            Constitution::Soeum => {
                "Strong kidneys, weak digestion. Logical, careful, analytical."
            }
        }
    }
}

impl fmt::Display for Constitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Constitution {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Constitution::ALL
            .into_iter()
            .find(|c| c.id() == s)
            .ok_or_else(|| CoreError::UnknownConstitution(s.to_string()))
    }
}

/// Question grouping. Each category carries a different diagnostic weight
/// per constitution.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Category {
    Body,
    Personality,
    Symptoms,
    Preferences,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Body,
        Category::Personality,
        Category::Symptoms,
        Category::Preferences,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Category::Body => "body",
            Category::Personality => "personality",
            Category::Symptoms => "symptoms",
            Category::Preferences => "preferences",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.id() == s)
            .ok_or_else(|| CoreError::UnknownCategory(s.to_string()))
    }
}

/// A score per constitution. All four entries are always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConstitutionScores {
    pub taeyang: f64,
    pub soyang: f64,
    pub taeeum: f64,
    pub soeum: f64,
}

impl ConstitutionScores {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn uniform(value: f64) -> Self {
        Self {
            taeyang: value,
            soyang: value,
            taeeum: value,
            soeum: value,
        }
    }

    pub fn get(&self, constitution: Constitution) -> f64 {
        match constitution {
            Constitution::Taeyang => self.taeyang,
            Constitution::Soyang => self.soyang,
            Constitution::Taeeum => self.taeeum,
            Constitution::Soeum => self.soeum,
        }
    }

    pub fn get_mut(&mut self, constitution: Constitution) -> &mut f64 {
        match constitution {
            Constitution::Taeyang => &mut self.taeyang,
            Constitution::Soyang => &mut self.soyang,
            Constitution::Taeeum => &mut self.taeeum,
            Constitution::Soeum => &mut self.soeum,
        }
    }

    pub fn add(&mut self, constitution: Constitution, value: f64) {
        *self.get_mut(constitution) += value;
    }

    /// Entries in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Constitution, f64)> + '_ {
        Constitution::ALL.into_iter().map(|c| (c, self.get(c)))
    }

    pub fn sum(&self) -> f64 {
        self.iter().map(|(_, v)| v).sum()
    }

    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            taeyang: f(self.taeyang),
            soyang: f(self.soyang),
            taeeum: f(self.taeeum),
            soeum: f(self.soeum),
        }
    }

    /// The highest-scoring constitution. On exact ties the one earliest in
    /// canonical order wins.
    pub fn primary(&self) -> Constitution {
        let mut best = Constitution::Taeyang;
        for c in Constitution::ALL {
            if self.get(c) > self.get(best) {
                best = c;
            }
        }
        best
    }

    /// Entries sorted by descending score, ties kept in canonical order.
    pub fn ranked(&self) -> Vec<(Constitution, f64)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| b.1.total_cmp(&a.1));
        entries
    }

    /// Each entry as a percentage of the total. An all-zero vector yields
    /// 25% everywhere.
    pub fn shares(&self) -> Self {
        let total = self.sum();
        if total > 0.0 {
            self.map(|v| v / total * 100.0)
        } else {
            Self::uniform(25.0)
        }
    }
}

/// One score vector per question category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoryScores {
    pub body: ConstitutionScores,
    pub personality: ConstitutionScores,
    pub symptoms: ConstitutionScores,
    pub preferences: ConstitutionScores,
}

impl CategoryScores {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn get(&self, category: Category) -> &ConstitutionScores {
        match category {
            Category::Body => &self.body,
            Category::Personality => &self.personality,
            Category::Symptoms => &self.symptoms,
            Category::Preferences => &self.preferences,
        }
    }

    pub fn get_mut(&mut self, category: Category) -> &mut ConstitutionScores {
        match category {
            Category::Body => &mut self.body,
            Category::Personality => &mut self.personality,
            Category::Symptoms => &mut self.symptoms,
            Category::Preferences => &mut self.preferences,
        }
    }
}
