/// 가전 기본 소비전력 프로필.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApplianceProfile {
    pub name: &'static str,
    /// 기본 소비전력 [kW]
    pub power_kw: f64,
}

const fn profile(name: &'static str, power_kw: f64) -> ApplianceProfile {
    ApplianceProfile { name, power_kw }
}

static DEFAULT_PROFILES: [ApplianceProfile; 14] = [
    profile("Air Conditioner", 1.5),
    profile("Refrigerator", 0.2),
    profile("Washing Machine", 0.5),
    profile("Microwave", 1.2),
    profile("Electric Fan", 0.075),
    profile("Iron", 1.0),
    profile("Television", 0.1),
    profile("Laptop", 0.05),
    profile("Desktop Computer", 0.2),
    profile("Water Heater", 3.0),
    profile("Toaster", 0.8),
    profile("Blender", 0.3),
    profile("Rice Cooker", 0.6),
    profile("Electric Kettle", 1.5),
];

/// 읽기 전용 가전 목록. 메뉴에 표시되는 순서를 유지한다.
#[derive(Debug, Clone, Copy)]
pub struct ApplianceCatalog {
    profiles: &'static [ApplianceProfile],
}

impl ApplianceCatalog {
    pub fn builtin() -> Self {
        Self {
            profiles: &DEFAULT_PROFILES,
        }
    }

    pub fn profiles(&self) -> &'static [ApplianceProfile] {
        self.profiles
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// 이름이 정확히 일치하는 프로필을 찾는다.
    pub fn find(&self, name: &str) -> Option<&'static ApplianceProfile> {
        self.profiles.iter().find(|p| p.name == name)
    }

    /// 1부터 시작하는 메뉴 번호로 프로필을 찾는다.
    pub fn by_number(&self, number: usize) -> Option<&'static ApplianceProfile> {
        number.checked_sub(1).and_then(|idx| self.profiles.get(idx))
    }
}
