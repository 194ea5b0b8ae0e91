//! Text and links shown on the site.

pub const OWNER: &str = "Daniel Kurzer";
pub const INITIALS: &str = "DK";

pub struct Social {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub const SOCIALS: &[Social] = &[
    Social {
        label: "GitHub",
        href: "https://github.com/daniel-kurzer",
        icon: "devicon-github-original",
    },
    Social {
        label: "X",
        href: "https://x.com/daniel_kurzer",
        icon: "devicon-twitter-original",
    },
    Social {
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/daniel-kurzer/",
        icon: "devicon-linkedin-plain",
    },
];

pub struct Project {
    pub title: &'static str,
    pub image: &'static str,
    pub link: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "LATEST. Fashion-Webshop",
        image: "/images/SS_Startseite.png",
        link: "https://github.com/daniel-kurzer/LATEST.-Webshop",
    },
    Project {
        title: "QUANTUMLEAP SEO. Platform",
        image: "/images/QuantumLeap_SEO.png",
        link: "https://github.com/daniel-kurzer/QuantumLeapSEO",
    },
    Project {
        title: "KURZER CODE. Webdev-page",
        image: "/images/KurzerCODE.png",
        link: "https://github.com/daniel-kurzer/KurzerCODE",
    },
    Project {
        title: "OPTIMAL BITE. Food-Ordering Webshop",
        image: "/images/Optimal_Bite.png",
        link: "https://github.com/daniel-kurzer/OPTIMAL-BITE/tree/main/Food-App-React.JS",
    },
];

pub struct Experience {
    pub role: &'static str,
    pub company: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
    pub skills: &'static [&'static str],
}

pub const EXPERIENCE: &[Experience] = &[
    Experience {
        role: "Frontend Developer",
        company: "Freelance / Self-employed",
        duration: "Since July 2025",
        description: "Design and development of responsive web applications with React and \
                      Tailwind CSS. Implementation of UI animations with GSAP.",
        skills: &["JavaScript", "TypeScript", "C#", "React", "Tailwind CSS", "GSAP", "Git"],
    },
    Experience {
        role: "Intern - IT specialist for application development",
        company: "AIT Goehner GmbH",
        duration: "March 2024 - April 2025",
        description: "I supported IntraNet (C#) & website development and independently \
                      delivered key projects: StockHorizon (Next.js/TypeScript inventory), \
                      QuantumLeapSEO (SEO platform), and LATEST. (a comprehensive React web \
                      store). This hands-on experience was crucial for developing new features \
                      and optimizing the user interface.",
        skills: &["JavaScript", "TypeScript", "C#", "React", "Tailwind CSS", "Git", "MySQL"],
    },
];

pub struct Education {
    pub degree: &'static str,
    pub school: &'static str,
    pub duration: &'static str,
}

pub const EDUCATION: &[Education] = &[
    Education {
        degree: "Retraining - IT specialist for application development",
        school: "ComCave College GmbH, Stuttgart",
        duration: "2023 - 2025",
    },
    Education {
        degree: "Apprenticeship - Plant mechanic for sanitary, heating and air conditioning \
                 technology",
        school: "Gottlieb-Daimler-Schule, Sindelfingen",
        duration: "2007 - 2011",
    },
];

pub struct Tech {
    pub name: &'static str,
    /// Devicon class; `None` falls back to a text badge.
    pub icon: Option<&'static str>,
}

pub struct TechCategory {
    pub name: &'static str,
    pub items: &'static [Tech],
}

const fn tech(name: &'static str, icon: &'static str) -> Tech {
    Tech {
        name,
        icon: Some(icon),
    }
}

pub const TECH_STACK: &[TechCategory] = &[
    TechCategory {
        name: "Programming languages",
        items: &[
            tech("JavaScript", "devicon-javascript-plain colored"),
            tech("TypeScript", "devicon-typescript-plain colored"),
            tech("C#", "devicon-csharp-plain colored"),
            tech("Java", "devicon-java-plain colored"),
        ],
    },
    TechCategory {
        name: "Front-end development",
        items: &[
            tech("HTML5", "devicon-html5-plain colored"),
            tech("CSS3", "devicon-css3-plain colored"),
            tech("React", "devicon-react-original colored"),
            tech("Next.js", "devicon-nextjs-plain"),
            tech("Tailwind CSS", "devicon-tailwindcss-original colored"),
        ],
    },
    TechCategory {
        name: "UI/UX & Animation",
        items: &[
            tech("Framer Motion", "devicon-framermotion-original"),
            Tech {
                name: "GSAP",
                icon: None,
            },
            Tech {
                name: "Spline",
                icon: None,
            },
            tech("Figma", "devicon-figma-plain colored"),
        ],
    },
    TechCategory {
        name: "Backend & Databases",
        items: &[
            tech("Node.js", "devicon-nodejs-plain colored"),
            tech("MySQL", "devicon-mysql-plain colored"),
        ],
    },
    TechCategory {
        name: "Version management",
        items: &[
            tech("Git", "devicon-git-plain colored"),
            tech("GitHub", "devicon-github-original"),
        ],
    },
];

pub const HERO_SCENE: &str = "https://prod.spline.design/RJvzrMJFmoFJPD6q/scene.splinecode";
pub const EXPERIENCE_SCENE: &str = "https://prod.spline.design/U6K-tT1B8WaDHTJY/scene.splinecode";

pub const STAR_COUNT: usize = 7;

/// Placement and drift of one background star in the about section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub size_px: f64,
    pub top_pct: f64,
    pub left_pct: f64,
    pub opacity: f64,
    pub flicker_secs: f64,
    /// Scrub lag in seconds, between 0.5 and 1.0.
    pub speed: f64,
    /// Drift at the end of the section scroll.
    pub dx: f64,
    pub dy: f64,
    pub rotation: f64,
}

/// Fractional part of `n` times the golden ratio conjugate, salted per property.
fn spread(n: usize, salt: f64) -> f64 {
    ((n as f64 + 1.0) * 0.618_033_988_749_895 + salt).fract()
}

/// Star layout. Deterministic so server and client render the same markup.
pub fn stars() -> Vec<Star> {
    (0..STAR_COUNT)
        .map(|i| {
            let direction = if i % 2 == 0 { 1.0 } else { -1.0 };
            let step = i as f64;
            Star {
                size_px: 5.0 + step * 2.0,
                top_pct: (spread(i, 0.11) * 100.0).round(),
                left_pct: (spread(i, 0.47) * 100.0).round(),
                opacity: 0.4 + spread(i, 0.29) * 0.4,
                flicker_secs: 2.0 + spread(i, 0.83) * 3.0,
                speed: 0.5 + spread(i, 0.61) * 0.5,
                dx: direction * (100.0 + step * 20.0),
                dy: direction * -50.0 - step * 10.0,
                rotation: direction * 360.0,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stars_are_stable() {
        let first = stars();
        assert_eq!(first.len(), STAR_COUNT);
        assert_eq!(first, stars());
    }

    #[test]
    fn test_star_ranges() {
        for (i, star) in stars().iter().enumerate() {
            assert!((0.5..=1.0).contains(&star.speed), "star {i} speed {}", star.speed);
            assert!((0.0..=100.0).contains(&star.top_pct));
            assert!((0.4..=0.8).contains(&star.opacity));
            assert_eq!(star.size_px, 5.0 + 2.0 * i as f64);
        }
        let stars = stars();
        assert_eq!(stars[0].rotation, 360.0);
        assert_eq!(stars[1].rotation, -360.0);
        assert_eq!(stars[1].dx, -120.0);
    }

    #[test]
    fn test_every_category_has_items() {
        assert_eq!(TECH_STACK.len(), 5);
        assert!(TECH_STACK.iter().all(|c| !c.items.is_empty()));
        assert!(PROJECTS.iter().all(|p| p.link.starts_with("https://")));
    }
}
