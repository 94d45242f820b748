use yew::prelude::*;

/// Symbolic icon names used by the content tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    ArrowRight,
    BookOpen,
    BookOpenCheck,
    Briefcase,
    ChevronDown,
    ChevronUp,
    Close,
    Facebook,
    FileText,
    GraduationCap,
    HeartHandshake,
    HelpCircle,
    Instagram,
    Library,
    Linkedin,
    Mail,
    MapPin,
    Menu,
    MessageSquare,
    Mic,
    Network,
    Newspaper,
    Phone,
    Presentation,
    Send,
    ThumbsUp,
    Twitter,
    UserPlus,
    Users,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::ArrowRight => "→",
            Icon::BookOpen => "📖",
            Icon::BookOpenCheck => "📘",
            Icon::Briefcase => "💼",
            Icon::ChevronDown => "⌄",
            Icon::ChevronUp => "⌃",
            Icon::Close => "✕",
            Icon::Facebook => "f",
            Icon::FileText => "📄",
            Icon::GraduationCap => "🎓",
            Icon::HeartHandshake => "🤝",
            Icon::HelpCircle => "❓",
            Icon::Instagram => "◎",
            Icon::Library => "📚",
            Icon::Linkedin => "in",
            Icon::Mail => "✉",
            Icon::MapPin => "📍",
            Icon::Menu => "☰",
            Icon::MessageSquare => "💬",
            Icon::Mic => "🎤",
            Icon::Network => "🌐",
            Icon::Newspaper => "📰",
            Icon::Phone => "📞",
            Icon::Presentation => "📊",
            Icon::Send => "➤",
            Icon::ThumbsUp => "👍",
            Icon::Twitter => "𝕏",
            Icon::UserPlus => "🧑‍🏫",
            Icon::Users => "👥",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconGlyphProps {
    pub icon: Icon,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(IconGlyph)]
pub fn icon_glyph(props: &IconGlyphProps) -> Html {
    html! {
        <span class={classes!("icon", props.class.clone())} aria-hidden="true">
            {props.icon.glyph()}
        </span>
    }
}
