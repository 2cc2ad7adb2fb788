pub struct Profile {
    pub name: &'static str,
    pub handle: &'static str,
    pub role: &'static str,
    pub tagline: &'static str,
    pub bio: &'static [&'static str],
    pub location: &'static str,
    pub availability: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub socials: &'static [Social],
}

impl Profile {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn tel(&self) -> String {
        let digits = self
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect::<String>();
        format!("tel:{digits}")
    }
}

pub struct Social {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
    pub icon: &'static str,
}

pub struct Tech {
    pub name: &'static str,
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectKind {
    Ecommerce,
    LuxuryEcommerce,
    WebApplication,
    TourismPlatform,
    CorporateWebsite,
    ServicePlatform,
    InternalSoftware,
    CustomSoftware,
    DeveloperTool,
}

impl ProjectKind {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectKind::Ecommerce => "E-commerce",
            ProjectKind::LuxuryEcommerce => "Luxury E-commerce",
            ProjectKind::WebApplication => "Web Application",
            ProjectKind::TourismPlatform => "Tourism Platform",
            ProjectKind::CorporateWebsite => "Corporate Website",
            ProjectKind::ServicePlatform => "Service Platform",
            ProjectKind::InternalSoftware => "Internal Software",
            ProjectKind::CustomSoftware => "Custom Software",
            ProjectKind::DeveloperTool => "Developer Tool",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            ProjectKind::Ecommerce => "bg-green-500/20 text-green-400 border-green-500/30",
            ProjectKind::CustomSoftware => "bg-purple-500/20 text-purple-400 border-purple-500/30",
            ProjectKind::DeveloperTool => "bg-blue-500/20 text-blue-400 border-blue-500/30",
            _ => "bg-orange-500/20 text-orange-400 border-orange-500/30",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ProjectKind::Ecommerce => "extra-cart",
            ProjectKind::DeveloperTool => "extra-terminal",
            ProjectKind::WebApplication => "extra-globe",
            _ => "extra-code",
        }
    }
}

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub kind: ProjectKind,
    pub live: &'static str,
    pub features: &'static [&'static str],
}

impl Project {
    /// Public URL, if the project has one.
    pub fn live_url(&self) -> Option<&'static str> {
        match self.live {
            "" | "#" => None,
            url => Some(url),
        }
    }
}

pub struct Role {
    pub period: &'static str,
    pub title: &'static str,
    pub company: &'static str,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
}

pub static PROFILE: Profile = Profile {
    name: "Pradip Gurung",
    handle: "~/pradip-gurung",
    role: "Front-End Developer",
    tagline: "Crafting exceptional web experiences with modern technologies. Specialized in React ecosystem, e-commerce solutions, and custom software development.",
    bio: &[
        "I'm a passionate frontend developer with 3+ years of experience specializing in React ecosystem. I focus on creating exceptional user experiences with modern technologies like React, Next.js, and Inertia.js.",
        "My journey started in late 2021, and since then I've been obsessed with creating exceptional digital experiences using the latest technologies in the React ecosystem.",
    ],
    location: "Nepal 🇳🇵",
    availability: "Available for part time freelance projects",
    email: "gprdp07@gmail.com",
    phone: "+977 9826153033",
    socials: &[
        Social {
            label: "GitHub",
            href: "https://github.com/iamprdp-git",
            icon: "devicon-github-plain",
        },
        Social {
            label: "LinkedIn",
            href: "https://www.linkedin.com/in/pradip-gurung-066359200/",
            icon: "devicon-linkedin-plain",
        },
        Social {
            label: "X",
            href: "https://x.com/gprdp07",
            icon: "extra-x",
        },
    ],
};

pub static STATS: &[Stat] = &[
    Stat {
        label: "Projects Completed",
        value: "25+",
        icon: "extra-code",
    },
    Stat {
        label: "Happy Clients",
        value: "15+",
        icon: "extra-users",
    },
    Stat {
        label: "Years Experience",
        value: "3+",
        icon: "extra-calendar",
    },
    Stat {
        label: "Technologies",
        value: "20+",
        icon: "extra-database",
    },
];

pub static TECH_STACK: &[Tech] = &[
    Tech { name: "React", color: "border-blue-500 text-blue-400 bg-blue-500/10" },
    Tech { name: "Next.js", color: "border-slate-400 text-slate-300 bg-slate-500/10" },
    Tech { name: "TypeScript", color: "border-blue-600 text-blue-500 bg-blue-600/10" },
    Tech { name: "Tailwind CSS", color: "border-cyan-500 text-cyan-400 bg-cyan-500/10" },
    Tech { name: "Inertia.js", color: "border-purple-500 text-purple-400 bg-purple-500/10" },
    Tech { name: "shadcn/ui", color: "border-slate-500 text-slate-400 bg-slate-500/10" },
    Tech { name: "React Query", color: "border-red-500 text-red-400 bg-red-500/10" },
    Tech { name: "Zustand", color: "border-orange-500 text-orange-400 bg-orange-500/10" },
    Tech { name: "Zod", color: "border-indigo-500 text-indigo-400 bg-indigo-500/10" },
    Tech { name: "Framer Motion", color: "border-pink-500 text-pink-400 bg-pink-500/10" },
    Tech { name: "React Router", color: "border-green-500 text-green-400 bg-green-500/10" },
    Tech { name: "MongoDB", color: "border-green-600 text-green-500 bg-green-600/10" },
    Tech { name: "PostgreSQL", color: "border-blue-700 text-blue-600 bg-blue-700/10" },
    Tech { name: "MySQL", color: "border-orange-600 text-orange-500 bg-orange-600/10" },
    Tech { name: "SEO Optimization", color: "border-yellow-500 text-yellow-400 bg-yellow-500/10" },
    Tech { name: "Performance Optimization", color: "border-emerald-500 text-emerald-400 bg-emerald-500/10" },
    Tech { name: "Responsive Design", color: "border-teal-500 text-teal-400 bg-teal-500/10" },
    Tech { name: "API Integration", color: "border-violet-500 text-violet-400 bg-violet-500/10" },
];

pub static PROJECTS: &[Project] = &[
    Project {
        title: "Scottish Borders Cashmere - Luxury E-commerce",
        description: "Premium e-commerce platform for luxury cashmere products with elegant design and smooth shopping experience.",
        tech: &["React", "Next.js", "shadcn/ui", "Framer Motion", "TypeScript"],
        kind: ProjectKind::LuxuryEcommerce,
        live: "https://scottishborderscashmere.com/",
        features: &["Luxury design", "Product showcase", "Smooth animations", "Premium UX"],
    },
    Project {
        title: "TG Wayon - Digital Platform",
        description: "A comprehensive digital platform built with modern React architecture, featuring responsive design and seamless user experience.",
        tech: &["React", "Zod", "shadcn/ui", "MySQL", "Tailwind CSS", "TypeScript"],
        kind: ProjectKind::WebApplication,
        live: "https://tgwayon.com/",
        features: &["Responsive design", "Modern UI/UX", "Performance optimized", "SEO friendly"],
    },
    Project {
        title: "Malla Treks - Tourism Platform",
        description: "Tourism and trekking platform showcasing Nepal's beautiful destinations with interactive features and booking capabilities.",
        tech: &["React", "Zod", "shadcn/ui", "React query", "Tailwind CSS", "TypeScript"],
        kind: ProjectKind::TourismPlatform,
        live: "https://mallatreks.banil.com.np/",
        features: &["Interactive galleries", "Booking system", "Destination showcase", "Mobile responsive"],
    },
    Project {
        title: "Two Ace Solutions - Corporate Website",
        description: "Professional corporate website with modern design principles, showcasing services and company portfolio.",
        tech: &["React", "TypeScript", "shadcn/ui", "Framer Motion", "Tailwind CSS"],
        kind: ProjectKind::CorporateWebsite,
        live: "https://twoacesolutions.com/",
        features: &["Professional design", "Service showcase", "Contact integration", "Fast loading"],
    },
    Project {
        title: "Tricot Nepal - E-commerce Platform",
        description: "E-commerce platform for textile products with product catalog, shopping cart, and order management system.",
        tech: &["React", "Tailwind CSS", "Zod", "React Query"],
        kind: ProjectKind::Ecommerce,
        live: "https://tricotnepal.com/",
        features: &["Product catalog", "Shopping cart", "Order management", "Payment integration"],
    },
    Project {
        title: "Yog Sewa - Wellness Platform",
        description: "Wellness and yoga service platform with class scheduling, instructor profiles, and service booking functionality.",
        tech: &["React", "Inertia.js", "Tailwind CSS", "TypeScript"],
        kind: ProjectKind::ServicePlatform,
        live: "https://yogsewa.com/",
        features: &["Class scheduling", "Instructor profiles", "Service booking", "User dashboard"],
    },
    Project {
        title: "Bank Evaluation Management System",
        description: "Comprehensive internal software for banks to evaluate building, land, vehicle, plant and machinery assets. Provides fair market value assessment with detailed setback analysis for loan processing.",
        tech: &["React", "Inertia.js", "TypeScript", "Zod", "React Query"],
        kind: ProjectKind::InternalSoftware,
        live: "#",
        features: &["Asset evaluation", "Fair market value calculation", "Setback analysis", "Report generation"],
    },
    Project {
        title: "Waste Management System",
        description: "Internal software solution for waste management operations including route optimization, collection tracking, and resource management with real-time monitoring capabilities.",
        tech: &["React", "TypeScript", "Tailwind CSS", "React Query"],
        kind: ProjectKind::InternalSoftware,
        live: "#",
        features: &["Route optimization", "Collection tracking", "Resource management", "Real-time monitoring"],
    },
];

pub static EXPERIENCE: &[Role] = &[
    Role {
        period: "Early 2022 - Present",
        title: "Full-Stack React Developer",
        company: "Two Ace Solutions Pvt Ltd",
        description: "Leading development of complex web applications, e-commerce platforms, and internal software solutions. Specialized in React ecosystem with focus on performance optimization and user experience. Built all featured projects during this tenure.",
        achievements: &[
            "Built 15+ production applications including e-commerce platforms",
            "Developed internal software for banks and waste management",
            "Improved client conversion rates by 40% through optimized UX",
            "Led frontend architecture decisions for multiple projects",
        ],
    },
    Role {
        period: "Late 2021",
        title: "Software Development Intern",
        company: "Tukisoft",
        description: "3-month internship focused on learning industry best practices and working on real-world projects. Gained hands-on experience with modern web development technologies and agile development processes.",
        achievements: &[
            "Contributed to live projects using React and modern tools",
            "Learned industry-standard development workflows",
            "Collaborated with senior developers on code reviews",
        ],
    },
    Role {
        period: "Mid 2021",
        title: "Started Programming Journey",
        company: "Self-taught & College Project",
        description: "Began learning web development through documentation and online resources. Built first major project - a Homestay Management System for college, which sparked passion for software development.",
        achievements: &[
            "Built Homestay Management System as first major project",
            "Self-taught React, JavaScript, and web development fundamentals",
            "Transitioned from beginner to intern-ready developer in 6 months",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_links_have_no_url() {
        let internal = PROJECTS
            .iter()
            .filter(|p| p.kind == ProjectKind::InternalSoftware)
            .collect::<Vec<_>>();
        assert_eq!(internal.len(), 2);
        assert!(internal.iter().all(|p| p.live_url().is_none()));
        assert_eq!(
            PROJECTS[0].live_url(),
            Some("https://scottishborderscashmere.com/")
        );
    }

    #[test]
    fn test_badge_styles() {
        assert!(ProjectKind::Ecommerce.badge_class().contains("green"));
        // only the plain e-commerce kind gets the green badge
        assert!(ProjectKind::LuxuryEcommerce.badge_class().contains("orange"));
        assert_eq!(ProjectKind::WebApplication.icon(), "extra-globe");
        assert_eq!(ProjectKind::TourismPlatform.icon(), "extra-code");
    }

    #[test]
    fn test_contact_links() {
        assert_eq!(PROFILE.mailto(), "mailto:gprdp07@gmail.com");
        assert_eq!(PROFILE.tel(), "tel:+9779826153033");
    }

    #[test]
    fn test_every_project_is_complete() {
        for p in PROJECTS {
            assert!(!p.title.is_empty());
            assert!(!p.tech.is_empty(), "{} has no tech", p.title);
            assert!(!p.features.is_empty(), "{} has no features", p.title);
        }
        assert!(EXPERIENCE.iter().all(|r| !r.achievements.is_empty()));
    }
}
