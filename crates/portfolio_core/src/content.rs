//! Fixed copy shown on the page.

use serde::Serialize;

pub const BRAND: &str = "NS";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SocialNetwork {
    Github,
    Linkedin,
    Twitter,
    Youtube,
}

impl SocialNetwork {
    pub fn label(self) -> &'static str {
        match self {
            SocialNetwork::Github => "GitHub",
            SocialNetwork::Linkedin => "LinkedIn",
            SocialNetwork::Twitter => "Twitter",
            SocialNetwork::Youtube => "YouTube",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub network: SocialNetwork,
    /// `None` for networks without a public profile yet.
    pub url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stat {
    pub value: &'static str,
    pub caption: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AboutCopy {
    pub title: &'static str,
    pub paragraphs: &'static [&'static str],
    pub stats: &'static [Stat],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Skill {
    pub name: &'static str,
    pub percent: u8,
}

impl Skill {
    pub fn fraction(&self) -> f32 {
        f32::from(self.percent.min(100)) / 100.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkillGroup {
    pub title: &'static str,
    pub skills: &'static [Skill],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContactDetail {
    pub label: &'static str,
    pub value: &'static str,
    pub href: Option<&'static str>,
}

pub const HERO_GREETING: &str = "Hola, soy";
pub const HERO_PRIMARY_ACTION: &str = "Ver proyectos";
pub const HERO_SECONDARY_ACTION: &str = "Contactar";

pub const ABOUT: AboutCopy = AboutCopy {
    title: "Sobre mí",
    paragraphs: &[
        "Soy un desarrollador de software apasionado por crear soluciones tecnológicas innovadoras. Me especializo en desarrollo web con React y JavaScript, siempre buscando aprender nuevas tecnologías y mejorar mis habilidades.",
        "Mi enfoque se centra en escribir código limpio y mantenible, con especial atención al rendimiento y la experiencia del usuario. Disfruto trabajando en equipo y colaborando en proyectos desafiantes que me permitan crecer profesionalmente.",
    ],
    stats: &[
        Stat {
            value: "2+",
            caption: "Años de experiencia",
        },
        Stat {
            value: "10+",
            caption: "Proyectos completados",
        },
    ],
};

pub const PROJECTS_TITLE: &str = "Mis Proyectos";
pub const PROJECTS_SUBTITLE: &str = "Una selección de mis trabajos más recientes y destacados";
pub const PROJECTS_MORE_LABEL: &str = "Ver más proyectos en GitHub";
pub const REPOSITORY_LINK_LABEL: &str = "Ver repo";

pub const SKILLS_TITLE: &str = "Mis Habilidades";
pub const SKILLS_SUBTITLE: &str = "Tecnologías y herramientas con las que trabajo";
pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        title: "Frontend",
        skills: &[
            Skill {
                name: "React",
                percent: 90,
            },
            Skill {
                name: "JavaScript",
                percent: 85,
            },
            Skill {
                name: "HTML/CSS",
                percent: 95,
            },
        ],
    },
    SkillGroup {
        title: "Backend",
        skills: &[
            Skill {
                name: "Node.js",
                percent: 75,
            },
            Skill {
                name: "Express",
                percent: 80,
            },
            Skill {
                name: "MongoDB",
                percent: 70,
            },
        ],
    },
];

pub const CONTACT_TITLE: &str = "Contacto";
pub const CONTACT_SUBTITLE: &str = "¿Interesado en trabajar juntos? Ponte en contacto conmigo";
pub const CONTACT_FORM_TITLE: &str = "Envíame un mensaje";
pub const CONTACT_SUBMIT_LABEL: &str = "Enviar mensaje";
pub const CONTACT_SUCCESS_MESSAGE: &str =
    "¡Gracias por tu mensaje! Te responderé lo antes posible.";
pub const CONTACT_DETAILS: &[ContactDetail] = &[
    ContactDetail {
        label: "Email",
        value: "nicobs3436@gmail.com",
        href: Some("mailto:nicobs3436@gmail.com"),
    },
    ContactDetail {
        label: "Teléfono",
        value: "+34",
        href: Some("tel:+123456789"),
    },
    ContactDetail {
        label: "Ubicación",
        value: "Huelva, España",
        href: None,
    },
];

pub const FOOTER_NOTICE: &str = "© 2023 Nicolás Sánchez. Todos los derechos reservados.";

pub const HERO_NETWORKS: &[SocialNetwork] = &[
    SocialNetwork::Github,
    SocialNetwork::Linkedin,
    SocialNetwork::Twitter,
];
pub const CONTACT_NETWORKS: &[SocialNetwork] = &[
    SocialNetwork::Github,
    SocialNetwork::Linkedin,
    SocialNetwork::Twitter,
    SocialNetwork::Youtube,
];
