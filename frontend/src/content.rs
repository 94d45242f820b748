//! Static copy for the landing page.
//!
//! Everything here is `'static` and immutable. Components read it directly;
//! icons are plain [`Icon`] identifiers and only become glyphs at render time.

use crate::components::icons::Icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubMenuItem {
    pub title: &'static str,
    pub description: &'static str,
    pub link: &'static str,
}

/// A top-level menu entry points either at a page or at a dropdown, never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuTarget {
    Link(&'static str),
    Submenu(&'static [SubMenuItem]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub title: &'static str,
    pub icon: Icon,
    pub target: MenuTarget,
}

pub static MENU_ITEMS: &[MenuItem] = &[
    MenuItem {
        title: "Resource Hub",
        icon: Icon::BookOpen,
        target: MenuTarget::Submenu(&[
            SubMenuItem {
                title: "Business News & Updates",
                description: "Access to the latest industry news and trends.",
                link: "/resources/news-updates",
            },
            SubMenuItem {
                title: "Admissions",
                description: "Information and resources for business school admissions.",
                link: "/resources/admissions",
            },
            SubMenuItem {
                title: "Course Syllabi",
                description: "A searchable database of syllabi from various business programs.",
                link: "/resources/course-syllabi",
            },
            SubMenuItem {
                title: "Past Examination Papers",
                description: "Archive of past exam papers for exam preparation.",
                link: "/resources/past-papers",
            },
            SubMenuItem {
                title: "Find Business School and University",
                description: "Explore and compare business schools and universities.",
                link: "/resources/find-schools",
            },
        ]),
    },
    MenuItem {
        title: "Career Listings",
        icon: Icon::Briefcase,
        target: MenuTarget::Submenu(&[
            SubMenuItem {
                title: "Internships",
                description: "Unlock Your Future with Internships",
                link: "/career-listings/internships",
            },
            SubMenuItem {
                title: "Entry-Level Jobs",
                description: "Kickstart Your Career with Entry-Level Opportunities",
                link: "/career-listings/entry-level-jobs",
            },
            SubMenuItem {
                title: "Walk-In Recruitment",
                description: "Seize Opportunities with Walk-In Recruitment Events",
                link: "/career-listings/walk-in-recruitment",
            },
            SubMenuItem {
                title: "Career-Oriented Programs",
                description: "Enhance Your Career Readiness",
                link: "/career-listings/career-programs",
            },
            SubMenuItem {
                title: "Government Jobs",
                description: "Explore Government Job Opportunities",
                link: "/career-listings/government-jobs",
            },
        ]),
    },
    MenuItem {
        title: "Workshops",
        icon: Icon::Presentation,
        target: MenuTarget::Submenu(&[
            SubMenuItem {
                title: "Upcoming Workshops",
                description: "List of scheduled workshops with dates, times, and topics.",
                link: "/workshops/upcoming",
            },
            SubMenuItem {
                title: "Workshop Archive",
                description: "Access to recorded sessions for those unable to attend live.",
                link: "/workshops/archive",
            },
        ]),
    },
    MenuItem {
        title: "Networking",
        icon: Icon::Users,
        target: MenuTarget::Submenu(&[
            SubMenuItem {
                title: "Upcoming Events",
                description: "Calendar of networking events, webinars, and speaker series.",
                link: "/networking/events",
            },
            SubMenuItem {
                title: "Virtual Meetups",
                description: "Information on scheduled virtual networking sessions.",
                link: "/networking/virtual-meetups",
            },
            SubMenuItem {
                title: "Networking Tips",
                description: "Resources and articles on effective networking strategies.",
                link: "/networking/tips",
            },
        ]),
    },
    MenuItem {
        title: "Courses",
        icon: Icon::BookOpenCheck,
        target: MenuTarget::Link("/courses"),
    },
    MenuItem {
        title: "Blogs",
        icon: Icon::Newspaper,
        target: MenuTarget::Link("/blogs"),
    },
    MenuItem {
        title: "About Us",
        icon: Icon::Users,
        target: MenuTarget::Link("/about-us"),
    },
    MenuItem {
        title: "FAQ",
        icon: Icon::HelpCircle,
        target: MenuTarget::Link("/faq"),
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoinOption {
    pub title: &'static str,
    pub description: &'static str,
    pub link: &'static str,
    pub icon: Icon,
    /// Accent colour class suffix, e.g. `blue` -> `.tone-blue`.
    pub tone: &'static str,
}

pub static JOIN_OPTIONS: &[JoinOption] = &[
    JoinOption {
        title: "As Student",
        description: "Join our learning community",
        link: "/join/student",
        icon: Icon::GraduationCap,
        tone: "blue",
    },
    JoinOption {
        title: "As Mentor",
        description: "Share your expertise",
        link: "/join/mentor",
        icon: Icon::UserPlus,
        tone: "green",
    },
    JoinOption {
        title: "As Volunteer",
        description: "Support our community",
        link: "/join/volunteer",
        icon: Icon::HeartHandshake,
        tone: "yellow",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Benefit {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub features: &'static [&'static str],
    pub gradient: &'static str,
}

pub static BENEFITS: &[Benefit] = &[
    Benefit {
        title: "Comprehensive Resource Hub",
        description: "Access a centralized library featuring the latest business news, course syllabi, and past examination papers.",
        icon: Icon::Library,
        features: &["Weekly newsletters", "Searchable database", "User contributions"],
        gradient: "gradient-blue",
    },
    Benefit {
        title: "Interactive Skill-Building Workshops",
        description: "Participate in monthly workshops covering essential skills like public speaking, financial analysis, and digital marketing.",
        icon: Icon::Mic,
        features: &["Hands-on learning", "Expert instructors", "Recorded sessions"],
        gradient: "gradient-green",
    },
    Benefit {
        title: "Exclusive Networking Opportunities",
        description: "Connect with fellow students, alumni, and industry professionals through tailored networking events.",
        icon: Icon::Network,
        features: &["Virtual meetups", "Discussion rooms", "Professional connections"],
        gradient: "gradient-purple",
    },
    Benefit {
        title: "Career Readiness Support",
        description: "Access a dedicated job board featuring internships, entry-level positions, and career-oriented programs.",
        icon: Icon::GraduationCap,
        features: &["Updated job listings", "Employer video pitches", "Resume workshops"],
        gradient: "gradient-orange",
    },
    Benefit {
        title: "Guidance from Experienced Mentors",
        description: "Participate in structured mentorship programs that connect you with seasoned professionals in your field.",
        icon: Icon::UserPlus,
        features: &["Mentor matching", "Progress tracking", "Industry resources"],
        gradient: "gradient-pink",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureGroup {
    pub title: &'static str,
    pub icon: Icon,
    pub features: &'static [Feature],
}

pub static FEATURE_GROUPS: &[FeatureGroup] = &[
    FeatureGroup {
        title: "Resource Hub",
        icon: Icon::Library,
        features: &[
            Feature {
                title: "Business News & Updates",
                description: "Stay informed with curated industry insights and trends.",
                icon: Icon::Newspaper,
            },
            Feature {
                title: "Admissions Guide",
                description: "Navigate business school applications with expert advice.",
                icon: Icon::FileText,
            },
            Feature {
                title: "Academic Materials",
                description: "Access a rich library of syllabi and past papers.",
                icon: Icon::BookOpen,
            },
        ],
    },
    FeatureGroup {
        title: "Learning Hub",
        icon: Icon::Presentation,
        features: &[
            Feature {
                title: "Expert Articles",
                description: "Gain insights from thought leaders in various business domains.",
                icon: Icon::Newspaper,
            },
            Feature {
                title: "Interactive Workshops",
                description: "Enhance your skills through hands-on learning experiences.",
                icon: Icon::Users,
            },
        ],
    },
    FeatureGroup {
        title: "Network Central",
        icon: Icon::Network,
        features: &[
            Feature {
                title: "Industry Webinars",
                description: "Learn from top executives and expand your knowledge base.",
                icon: Icon::Mic,
            },
            Feature {
                title: "Peer Connect Events",
                description: "Build lasting relationships with future business leaders.",
                icon: Icon::Users,
            },
        ],
    },
    FeatureGroup {
        title: "Career Launchpad",
        icon: Icon::Briefcase,
        features: &[
            Feature {
                title: "Opportunity Board",
                description: "Discover internships and jobs tailored for business students.",
                icon: Icon::GraduationCap,
            },
            Feature {
                title: "Mentor Match",
                description: "Get personalized guidance from industry professionals.",
                icon: Icon::UserPlus,
            },
            Feature {
                title: "Career Toolkit",
                description: "Access cutting-edge tools for resume building and interview prep.",
                icon: Icon::FileText,
            },
        ],
    },
    FeatureGroup {
        title: "Community Hub",
        icon: Icon::MessageSquare,
        features: &[
            Feature {
                title: "Idea Exchange",
                description: "Engage in thought-provoking discussions with peers.",
                icon: Icon::MessageSquare,
            },
            Feature {
                title: "Community Voice",
                description: "Shape the future of our platform with your feedback.",
                icon: Icon::ThumbsUp,
            },
        ],
    },
];

pub fn find_feature_group(title: &str) -> Option<&'static FeatureGroup> {
    FEATURE_GROUPS.iter().find(|group| group.title == title)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub static FAQ_ENTRIES: &[FaqEntry] = &[
    FaqEntry {
        question: "What is IntendCareer and how can it benefit me?",
        answer: "IntendCareer is a comprehensive platform designed to support business students and professionals in their educational and career journeys. We offer resources like industry news, course materials, networking opportunities, and career support. By joining our community, you'll have access to valuable tools and connections that can help accelerate your professional growth.",
    },
    FaqEntry {
        question: "Is membership free? What are the costs associated with using IntendCareer?",
        answer: "Basic membership to IntendCareer is free, giving you access to our community forums, select resources, and job listings. We also offer premium memberships with additional benefits such as exclusive workshops, one-on-one mentoring, and advanced career tools. Pricing for premium features varies, and we offer student discounts. Check our pricing page for current rates and special offers.",
    },
    FaqEntry {
        question: "How often are new resources and job listings added to the platform?",
        answer: "We update our resources, including industry news and job listings, on a daily basis. New workshops and networking events are typically added on a weekly or monthly basis, depending on the type of event. Our team works diligently to ensure that you always have access to the most current and relevant information in the business world.",
    },
    FaqEntry {
        question: "Can I contribute content or host a workshop on IntendCareer?",
        answer: "We encourage community contributions. If you're an expert in your field or have valuable insights to share, you can submit articles, resources, or proposals for workshops through our 'Contribute' page. Our team reviews all submissions to ensure quality and relevance before publishing.",
    },
    FaqEntry {
        question: "How does the mentorship program work?",
        answer: "Our mentorship program connects students and early-career professionals with experienced industry leaders. To participate, create a profile highlighting your goals and areas of interest. Our algorithm will match you with potential mentors. You can then schedule virtual meetings, seek advice, and build a professional relationship. The program duration varies, but typically lasts for 3-6 months.",
    },
    FaqEntry {
        question: "What types of networking events does IntendCareer offer?",
        answer: "We offer a variety of networking events, including virtual meetups, industry-specific webinars, career fairs, and local in-person gatherings (where available). These events range from casual networking sessions to formal panel discussions with industry leaders. Check our 'Events' page regularly for upcoming opportunities to connect with peers and professionals in your field.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub static QUICK_LINKS: &[FooterLink] = &[
    FooterLink { label: "Resources", href: "/resources" },
    FooterLink { label: "Career Listings", href: "/career-listings" },
    FooterLink { label: "Workshops", href: "/workshops" },
    FooterLink { label: "Networking", href: "/networking" },
    FooterLink { label: "About Us", href: "/about-us" },
    FooterLink { label: "FAQ", href: "/faq" },
];

pub static LEGAL_LINKS: &[FooterLink] = &[
    FooterLink { label: "Privacy Policy", href: "/privacy-policy" },
    FooterLink { label: "Terms of Service", href: "/terms-of-service" },
    FooterLink { label: "Cookie Policy", href: "/cookie-policy" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: Icon,
}

pub static SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { label: "Facebook", href: "#", icon: Icon::Facebook },
    SocialLink { label: "LinkedIn", href: "#", icon: Icon::Linkedin },
    SocialLink { label: "Twitter", href: "#", icon: Icon::Twitter },
    SocialLink { label: "Instagram", href: "#", icon: Icon::Instagram },
];

pub const CONTACT_EMAIL: &str = "info@businesscommunity.com";
pub const CONTACT_PHONE_DISPLAY: &str = "+1 (123) 456-7890";
pub const CONTACT_PHONE_HREF: &str = "tel:+11234567890";
pub const CONTACT_ADDRESS: &str = "123 Business Lane, Suite 100, City, State, ZIP";
pub const BRAND_NAME: &str = "IntendCareer";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submenus_are_never_empty_and_paths_are_absolute() {
        for item in MENU_ITEMS {
            match item.target {
                MenuTarget::Submenu(entries) => {
                    assert!(!entries.is_empty(), "{} has an empty dropdown", item.title);
                    for entry in entries {
                        assert!(entry.link.starts_with('/'), "{}", entry.link);
                    }
                }
                MenuTarget::Link(path) => assert!(path.starts_with('/'), "{}", path),
            }
        }
    }

    #[test]
    fn join_options_cover_the_three_roles() {
        let links: Vec<_> = JOIN_OPTIONS.iter().map(|o| o.link).collect();
        assert_eq!(links, ["/join/student", "/join/mentor", "/join/volunteer"]);
    }

    #[test]
    fn feature_groups_are_found_by_title() {
        let group = find_feature_group("Career Launchpad").expect("group exists");
        assert_eq!(group.features.len(), 3);
        assert!(find_feature_group("career launchpad").is_none());
        assert!(find_feature_group("").is_none());
    }

    #[test]
    fn feature_group_titles_are_unique() {
        for (i, a) in FEATURE_GROUPS.iter().enumerate() {
            for b in &FEATURE_GROUPS[i + 1..] {
                assert_ne!(a.title, b.title);
            }
        }
    }

    #[test]
    fn legal_links_slug_every_word() {
        assert_eq!(LEGAL_LINKS[1].href, "/terms-of-service");
        assert!(LEGAL_LINKS.iter().all(|l| !l.href.contains(' ')));
    }
}
