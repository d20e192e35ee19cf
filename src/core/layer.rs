use super::constants::*;
use super::error::ConfigError;
use glam::Vec2;

/// Visual role of a parallax layer.
///
/// Variant order is detection priority: when an element carries several role
/// classes, the earliest variant wins. `HeroBackground` is the fallback for
/// layers with no recognised class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Role {
    ParticlesFront,
    Weapons,
    /// Every element with this role gets the centering base, not only the
    /// first one on the page.
    CenterFigure,
    ParticlesBack,
    Creation,
    Eden,
    HeroBackground,
}

impl Role {
    pub const COUNT: usize = 7;

    pub const ALL: [Role; Role::COUNT] = [
        Role::ParticlesFront,
        Role::Weapons,
        Role::CenterFigure,
        Role::ParticlesBack,
        Role::Creation,
        Role::Eden,
        Role::HeroBackground,
    ];

    #[inline]
    pub fn from_class(class: &str) -> Option<Role> {
        match class {
            "particles-front" => Some(Role::ParticlesFront),
            "weapons-layer" => Some(Role::Weapons),
            "center-image-wrapper" => Some(Role::CenterFigure),
            "particles-back" => Some(Role::ParticlesBack),
            "bg-layer-creation" => Some(Role::Creation),
            "bg-layer-eden" => Some(Role::Eden),
            _ => None,
        }
    }

    /// Resolve an element's role from its class list.
    pub fn from_classes<'a>(classes: impl IntoIterator<Item = &'a str>) -> Role {
        classes
            .into_iter()
            .filter_map(Role::from_class)
            .min()
            .unwrap_or(Role::HeroBackground)
    }

    /// Layers that sit behind the main scene.
    #[inline]
    pub fn is_background(self) -> bool {
        matches!(self, Role::Creation | Role::Eden | Role::HeroBackground)
    }

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

/// Direction background layers travel relative to the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackgroundDirection {
    /// Opposite to the pointer, like the foreground layers.
    #[default]
    Counter,
    /// With the pointer.
    Sympathetic,
}

impl BackgroundDirection {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "counter" => Some(BackgroundDirection::Counter),
            "sympathetic" | "inverted" => Some(BackgroundDirection::Sympathetic),
            _ => None,
        }
    }
}

/// Total mapping from [`Role`] to its signed speed divisor.
///
/// Smaller magnitudes move faster; the sign picks the direction. A table can
/// only be built with a finite, non-zero coefficient for every role.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedTable {
    coefficients: [f32; Role::COUNT],
}

impl SpeedTable {
    pub fn new(entries: &[(Role, f32)]) -> Result<Self, ConfigError> {
        let mut slots = [None::<f32>; Role::COUNT];
        for &(role, value) in entries {
            if !value.is_finite() || value == 0.0 {
                return Err(ConfigError::InvalidCoefficient { role, value });
            }
            slots[role.index()] = Some(value);
        }
        let mut coefficients = [0.0_f32; Role::COUNT];
        for role in Role::ALL {
            coefficients[role.index()] =
                slots[role.index()].ok_or(ConfigError::MissingRole(role))?;
        }
        Ok(Self { coefficients })
    }

    /// Force the sign of every background coefficient.
    pub fn with_background(mut self, direction: BackgroundDirection) -> Self {
        for role in Role::ALL.into_iter().filter(|r| r.is_background()) {
            let magnitude = self.coefficients[role.index()].abs();
            self.coefficients[role.index()] = match direction {
                BackgroundDirection::Counter => -magnitude,
                BackgroundDirection::Sympathetic => magnitude,
            };
        }
        self
    }

    #[inline]
    pub fn coefficient(&self, role: Role) -> f32 {
        self.coefficients[role.index()]
    }

    /// Scale a raw input delta into this role's movement.
    #[inline]
    pub fn movement(&self, role: Role, delta: Vec2) -> Vec2 {
        delta / self.coefficient(role)
    }
}

impl Default for SpeedTable {
    fn default() -> Self {
        Self {
            coefficients: [
                SPEED_PARTICLES_FRONT,
                SPEED_WEAPONS,
                SPEED_CENTER_FIGURE,
                SPEED_PARTICLES_BACK,
                SPEED_CREATION,
                SPEED_EDEN,
                SPEED_HERO_BACKGROUND,
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_matches_role_order() {
        let table = SpeedTable::default();
        let rebuilt = SpeedTable::new(&Role::ALL.map(|r| (r, table.coefficient(r)))).unwrap();
        assert_eq!(table, rebuilt);
        assert_eq!(table.coefficient(Role::ParticlesFront), SPEED_PARTICLES_FRONT);
        assert_eq!(table.coefficient(Role::HeroBackground), SPEED_HERO_BACKGROUND);
    }

    #[test]
    fn direction_parse_accepts_known_names() {
        assert_eq!(
            BackgroundDirection::parse(" Sympathetic "),
            Some(BackgroundDirection::Sympathetic)
        );
        assert_eq!(BackgroundDirection::parse("counter"), Some(BackgroundDirection::Counter));
        assert_eq!(BackgroundDirection::parse("sideways"), None);
    }
}
