//! User-facing strings in each supported language.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use stellar::EvolutionPhase;

/// Display language for chart labels and explanatory text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    English,
    Korean,
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Locale::English),
            "ko" | "korean" => Ok(Locale::Korean),
            other => Err(format!("unsupported locale: {}", other)),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            Locale::English => "en",
            Locale::Korean => "ko",
        };
        write!(f, "{}", str)
    }
}

/// Every string the chart, page and shell display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub app_title: &'static str,
    pub input_prompt: &'static str,
    pub luminosity_input: &'static str,
    pub temperature_input: &'static str,
    pub chart_title: &'static str,
    pub temperature_axis: &'static str,
    pub luminosity_axis: &'static str,
    pub main_sequence: &'static str,
    pub giants: &'static str,
    pub white_dwarfs: &'static str,
    pub evolution_path: &'static str,
    pub play: &'static str,
    pub explanation_heading: &'static str,
    pub explanation: [&'static str; 6],
    mass_prefix: &'static str,
    mass_suffix: &'static str,
    phases: [&'static str; 5],
}

const ENGLISH: Labels = Labels {
    app_title: "Stellar Evolution on the H-R Diagram",
    input_prompt: "Enter the star's luminosity and temperature:",
    luminosity_input: "Luminosity (solar luminosities, L_sun)",
    temperature_input: "Temperature (Kelvin, K)",
    chart_title: "H-R Diagram and Stellar Evolution",
    temperature_axis: "Temperature (K)",
    luminosity_axis: "Luminosity (L_sun)",
    main_sequence: "Main sequence",
    giants: "Giants",
    white_dwarfs: "White dwarfs",
    evolution_path: "Evolution path",
    play: "Play",
    explanation_heading: "Explanation",
    explanation: [
        "Main sequence: shown as blue points.",
        "Giants: shown as red points.",
        "White dwarfs: shown as green points.",
        "The star you entered is highlighted in yellow; the black line traces its evolution path.",
        "Below 8 solar masses a star passes through the red giant stage and ends as a white dwarf.",
        "At 8 solar masses or more a star passes through the supergiant stage and ends as a supernova.",
    ],
    mass_prefix: "Estimated mass: ",
    mass_suffix: " solar masses",
    phases: [
        "Main sequence",
        "Red giant",
        "White dwarf",
        "Supergiant",
        "Supernova",
    ],
};

const KOREAN: Labels = Labels {
    app_title: "H-R 다이어그램에서 별의 진화 시뮬레이션",
    input_prompt: "별의 광도와 온도를 입력하세요:",
    luminosity_input: "광도 (태양 광도 단위, L_sun)",
    temperature_input: "온도 (켈빈, K)",
    chart_title: "H-R 다이어그램과 별의 진화",
    temperature_axis: "온도 (K)",
    luminosity_axis: "광도 (L_sun)",
    main_sequence: "주계열성",
    giants: "거성",
    white_dwarfs: "백색왜성",
    evolution_path: "진화 경로",
    play: "재생",
    explanation_heading: "설명",
    explanation: [
        "주계열성: 파란색 점으로 표시.",
        "거성: 빨간색 점으로 표시.",
        "백색왜성: 초록색 점으로 표시.",
        "입력한 별은 노란색 점으로 표시되며, 검은 선은 진화 경로를 나타냅니다.",
        "질량이 8 태양 질량 미만이면 적색거성을 거쳐 백색왜성으로 진화합니다.",
        "질량이 8 태양 질량 이상이면 초거성을 거쳐 초신성으로 끝납니다.",
    ],
    mass_prefix: "추정된 질량: ",
    mass_suffix: " 태양 질량",
    phases: ["주계열성", "적색거성", "백색왜성", "초거성", "초신성"],
};

impl Locale {
    pub fn labels(&self) -> &'static Labels {
        match self {
            Locale::English => &ENGLISH,
            Locale::Korean => &KOREAN,
        }
    }
}

impl Labels {
    /// Estimated-mass line, two decimals
    pub fn mass_line(&self, solar_masses: f64) -> String {
        format!("{}{:.2}{}", self.mass_prefix, solar_masses, self.mass_suffix)
    }

    pub fn phase(&self, phase: EvolutionPhase) -> &'static str {
        let index = match phase {
            EvolutionPhase::MainSequence => 0,
            EvolutionPhase::RedGiant => 1,
            EvolutionPhase::WhiteDwarf => 2,
            EvolutionPhase::Supergiant => 3,
            EvolutionPhase::Supernova => 4,
        };
        self.phases[index]
    }

    /// Heading plus bullet list, as plain text
    pub fn explanation_text(&self) -> String {
        let mut text = format!("### {}\n", self.explanation_heading);
        for line in self.explanation {
            text.push_str("- ");
            text.push_str(line);
            text.push('\n');
        }
        text
    }
}
