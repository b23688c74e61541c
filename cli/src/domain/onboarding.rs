//! Onboarding steps and their static content.

/// Title/body pair shown on an intro step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntroPage {
    pub title: &'static str,
    pub body: &'static str,
}

pub const APP_NAME: &str = "CivitasAuth";

const WELCOME: IntroPage = IntroPage {
    title: "Your Digital Identity",
    body: "Access public services and procedures quickly and securely.",
};

const SECURITY: IntroPage = IntroPage {
    title: "Citizen Security",
    body: "Biometric validation and advanced data protection.",
};

/// Position in the onboarding flow. Only ever moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum OnboardingStep {
    #[default]
    Welcome,
    Security,
    /// The registration form; terminal for this flow.
    Registration,
}

impl OnboardingStep {
    /// 1-based step number.
    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            Self::Welcome => 1,
            Self::Security => 2,
            Self::Registration => 3,
        }
    }

    /// The step after pressing "continue". Registration stays put.
    #[must_use]
    pub fn advance(self) -> Self {
        match self {
            Self::Welcome => Self::Security,
            Self::Security | Self::Registration => Self::Registration,
        }
    }

    /// The step after pressing "skip".
    #[must_use]
    pub fn skip(self) -> Self {
        Self::Registration
    }

    #[must_use]
    pub fn is_form(self) -> bool {
        self == Self::Registration
    }

    /// Intro content, `None` on the form step.
    #[must_use]
    pub fn intro(self) -> Option<IntroPage> {
        match self {
            Self::Welcome => Some(WELCOME),
            Self::Security => Some(SECURITY),
            Self::Registration => None,
        }
    }
}
