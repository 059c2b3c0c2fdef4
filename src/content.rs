//! Static page content. Every record here is a literal; nothing is loaded or
//! mutated at runtime.

pub const OWNER_NAME: &str = "Kazuma Kuramoto";
pub const OWNER_MONOGRAM: &str = "KK";
pub const OWNER_ROLE: &str = "Full-Stack Developer";
pub const OWNER_LOCATION: &str = "Tokyo, Japan";

pub const RESUME_PATH: &str = "/KazumaKuramoto_Resume.pdf";
pub const GITHUB_URL: &str = "https://github.com/Kazumakr";
pub const GITHUB_HANDLE: &str = "github.com/Kazumakr";
pub const LINKEDIN_URL: &str = "https://linkedin.com/in/kazumakuramoto";
pub const LINKEDIN_HANDLE: &str = "linkedin.com/in/kazumakuramoto";
pub const MEDIUM_URL: &str = "https://medium.com/@kazumajs";
pub const CONTACT_EMAIL: &str = "kazumakuramoto.jp@gmail.com";
pub const MAILTO_HREF: &str = "mailto:kazumakuramoto.jp@gmail.com?subject=Project%20Inquiry";

pub const HERO_TAGLINE: &str =
    "Bringing sci-fi visions to reality and enhancing lives through innovative technology";

pub const ABOUT_SUBTITLE: &str = "Passionate developer creating innovative digital solutions";
pub const ABOUT_HEADLINE: &str = "Hi there! I'm Kazuma Kuramoto, a Full-Stack Developer";
pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "I began my journey in Electrical and Electronic Engineering with a strong foundation in \
     Computer Science. My passion for coding was ignited during my first year when I learned C \
     programming, which led me to explore deep learning evaluation using Python for my thesis in \
     a multimedia information processing lab.",
    "After graduation, I expanded my expertise in Canada, where I specialized in modern web \
     development frameworks like React and Node.js. Since joining Yuyosoft, I've contributed to \
     numerous cutting-edge projects, including web applications with React and NestJS, and \
     mobile apps using React Native.",
    "My ability to quickly adapt to and master new technologies has enabled me to play a key \
     role in setting up AWS environments and make comprehensive contributions throughout the \
     development lifecycle. I'm passionate about creating seamless user experiences that are \
     both beautiful and functional.",
];

pub const SKILLS_SUBTITLE: &str =
    "Leveraging modern technologies to create exceptional digital experiences";
pub const PROJECTS_SUBTITLE: &str = "A showcase of my recent work and creative endeavors";
pub const CONTACT_SUBTITLE: &str = "Have a project in mind? Let's work together!";
pub const CONTACT_BLURB: &str =
    "Feel free to reach out to me for collaborations, job opportunities, or just to say hello!";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Code,
    Terminal,
    Sparkles,
    Github,
    Linkedin,
    Medium,
    Mail,
    MapPin,
    Briefcase,
    Clock,
    Users,
    ArrowRight,
    ExternalLink,
    ChevronDown,
    Menu,
    Close,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Option<&'static str>,
    pub image: Option<&'static str>,
    pub tech: &'static [&'static str],
    pub gradient: &'static str,
    pub link: Option<&'static str>,
    pub period: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectAction {
    Visit(&'static str),
    Unavailable,
}

impl Project {
    pub fn action(&self) -> ProjectAction {
        match self.link {
            Some(link) => ProjectAction::Visit(link),
            None => ProjectAction::Unavailable,
        }
    }

    pub fn is_interactive(&self) -> bool {
        self.link.is_some()
    }
}

impl ProjectAction {
    pub fn label(self) -> &'static str {
        match self {
            Self::Visit(_) => "Visit Site",
            Self::Unavailable => "No Longer Available",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillCategory {
    pub title: &'static str,
    pub icon: Icon,
    pub skills: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub icon: Icon,
    pub href: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InfoItem {
    pub icon: Icon,
    pub text: &'static str,
    pub href: Option<&'static str>,
}

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "Curated Art Show",
        description: "A 3D virtual art exhibition platform that enables artists and curators to \
                      create and customize online galleries for free, expanding their reach \
                      beyond physical limitations.",
        icon: Some("🎨"),
        image: Some("/images/projects/curated-art-show.webp"),
        tech: &[
            "React",
            "React Three Fiber",
            "NestJS",
            "Tailwind",
            "Docker",
            "ECS",
            "S3",
            "CloudFront",
            "Lambda",
            "Prisma",
            "Stripe",
        ],
        gradient: "gradient-blue-purple",
        link: Some("https://curatedartshow.com"),
        period: Some("Aug 2022 – Mar 2025"),
    },
    Project {
        id: 2,
        title: "Curated Microfiction",
        description: "A biweekly microfiction platform where users can submit 300-word stories \
                      to compete for cash prizes or enjoy a curated collection of short fiction \
                      for free.",
        icon: Some("📝"),
        image: Some("/images/projects/curated-microfiction.webp"),
        tech: &[
            "React",
            "TypeScript",
            "NestJS",
            "Tailwind",
            "Docker",
            "ECS",
            "S3",
            "CloudFront",
            "Lambda",
            "PayPal",
        ],
        gradient: "gradient-purple-pink",
        link: Some("https://curatedmicrofiction.com"),
        period: Some("Jan 2024 – Jan 2025"),
    },
    Project {
        id: 3,
        title: "WancoCam",
        description: "A social media platform for dog lovers, where users share pet photos and \
                      videos in themed contests to compete for top rankings.",
        icon: Some("🐕"),
        image: Some("/images/projects/wancocam.webp"),
        tech: &[
            "React Native",
            "react-native-purchase",
            "NestJS",
            "Tailwind",
            "Docker",
            "ECS",
            "S3",
            "CloudFront",
            "Revenue Cat",
        ],
        gradient: "gradient-green-blue",
        link: None,
        period: Some("Sep 2023 – Jun 2024"),
    },
    Project {
        id: 4,
        title: "Peaceful World Music",
        description: "A music app featuring recordings of traditional instruments from around \
                      the world.",
        icon: Some("🎵"),
        image: Some("/images/projects/peaceful-world-music.webp"),
        tech: &[
            "React Native",
            "Redux",
            "react-native-track-player",
            "react-native-iap",
        ],
        gradient: "gradient-orange-red",
        link: Some("https://apps.apple.com/us/app/peaceful-world-music/id1531033141"),
        period: Some("Apr 2023 – May 2023"),
    },
];

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Languages",
        icon: Icon::Code,
        skills: &["JavaScript", "TypeScript", "PHP", "HTML", "CSS"],
    },
    SkillCategory {
        title: "Frameworks & Libraries",
        icon: Icon::Terminal,
        skills: &[
            "React",
            "Next.js",
            "React Native",
            "Expo",
            "NestJS",
            "Node.js",
            "Express",
            "Prisma",
            "Tailwind CSS",
            "Jest",
            "Three.js",
            "React Three Fiber",
            "Stripe",
            "PayPal",
        ],
    },
    SkillCategory {
        title: "Tools & Databases",
        icon: Icon::Sparkles,
        skills: &[
            "MySQL",
            "PostgreSQL",
            "AWS EC2",
            "AWS ECR",
            "AWS ECS",
            "AWS S3",
            "AWS CloudFront",
            "AWS Lambda",
            "AWS RDS",
            "Git",
            "SourceTree",
        ],
    },
];

/// Profiles linked from the navigation bar.
pub const NAV_SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        icon: Icon::Github,
        href: GITHUB_URL,
    },
    SocialLink {
        label: "LinkedIn",
        icon: Icon::Linkedin,
        href: LINKEDIN_URL,
    },
    SocialLink {
        label: "Medium",
        icon: Icon::Medium,
        href: MEDIUM_URL,
    },
];

/// Profiles linked from the contact card and the footer.
pub const PROFILE_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        icon: Icon::Github,
        href: GITHUB_URL,
    },
    SocialLink {
        label: "LinkedIn",
        icon: Icon::Linkedin,
        href: LINKEDIN_URL,
    },
];

pub const PERSONAL_INFO: &[InfoItem] = &[
    InfoItem {
        icon: Icon::MapPin,
        text: OWNER_LOCATION,
        href: None,
    },
    InfoItem {
        icon: Icon::Github,
        text: GITHUB_HANDLE,
        href: Some(GITHUB_URL),
    },
    InfoItem {
        icon: Icon::Linkedin,
        text: LINKEDIN_HANDLE,
        href: Some(LINKEDIN_URL),
    },
    InfoItem {
        icon: Icon::Briefcase,
        text: "3+ Years Experience",
        href: None,
    },
    InfoItem {
        icon: Icon::Clock,
        text: "Available for Freelance",
        href: None,
    },
    InfoItem {
        icon: Icon::Users,
        text: "Open to Collaboration",
        href: None,
    },
];

pub const CONTACT_INFO: &[InfoItem] = &[
    InfoItem {
        icon: Icon::MapPin,
        text: OWNER_LOCATION,
        href: None,
    },
    InfoItem {
        icon: Icon::Github,
        text: GITHUB_HANDLE,
        href: Some(GITHUB_URL),
    },
    InfoItem {
        icon: Icon::Linkedin,
        text: LINKEDIN_HANDLE,
        href: Some(LINKEDIN_URL),
    },
];

pub fn visible_projects(count: usize) -> &'static [Project] {
    &PROJECTS[..count.min(PROJECTS.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn project_ids_are_unique() {
        let ids: HashSet<u32> = PROJECTS.iter().map(|project| project.id).collect();
        assert_eq!(ids.len(), PROJECTS.len());
    }

    #[test]
    fn project_without_link_is_unavailable() {
        let wancocam = PROJECTS
            .iter()
            .find(|project| project.title == "WancoCam")
            .expect("WancoCam is listed");

        assert!(!wancocam.is_interactive());
        assert_eq!(wancocam.action(), ProjectAction::Unavailable);
        assert_eq!(wancocam.action().label(), "No Longer Available");
    }

    #[test]
    fn project_with_link_visits_it() {
        let art_show = &PROJECTS[0];
        assert_eq!(art_show.action(), ProjectAction::Visit("https://curatedartshow.com"));
        assert_eq!(art_show.action().label(), "Visit Site");
    }

    #[test]
    fn visible_projects_never_exceeds_the_list() {
        assert_eq!(visible_projects(2).len(), 2);
        assert_eq!(visible_projects(99).len(), PROJECTS.len());
        assert!(visible_projects(0).is_empty());
    }

    #[test]
    fn mailto_prefills_subject() {
        assert!(MAILTO_HREF.starts_with(&format!("mailto:{CONTACT_EMAIL}")));
        assert!(MAILTO_HREF.ends_with("?subject=Project%20Inquiry"));
    }

    #[test]
    fn skill_tags_are_non_empty() {
        assert_eq!(SKILL_CATEGORIES.len(), 3);
        assert!(SKILL_CATEGORIES
            .iter()
            .all(|category| category.skills.iter().all(|skill| !skill.trim().is_empty())));
    }
}
