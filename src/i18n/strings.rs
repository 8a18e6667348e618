use crate::i18n::Locale;

/// All localized display strings for one locale.
///
/// One field per dictionary key. Because every locale fills in the same
/// struct, every key is guaranteed to resolve to some string for every
/// supported locale; `t()` additionally falls back to the default locale
/// when a translation is left empty.
#[derive(Debug, Clone)]
pub struct LocaleStrings {
    // ==================== Header / Navigation ====================
    pub app_title: &'static str,
    pub nav_architecture: &'static str,
    pub nav_construction: &'static str,

    // ==================== Hero ====================
    pub hero_title: &'static str,
    pub hero_subtitle: &'static str,
    pub cta_primary: &'static str,
    pub cta_secondary: &'static str,

    // ==================== Page Metadata ====================
    pub meta_title_home: &'static str,
    pub meta_desc_home: &'static str,
    pub meta_title_finishes: &'static str,
    pub meta_desc_finishes: &'static str,
    pub meta_title_architecture: &'static str,
    pub meta_desc_architecture: &'static str,
    pub meta_title_construction: &'static str,
    pub meta_desc_construction: &'static str,

    // ==================== Contact Form ====================
    pub contact_heading: &'static str,
    pub contact_intro: &'static str,
    pub form_name_label: &'static str,
    pub form_email_label: &'static str,
    pub form_phone_label: &'static str,
    pub form_service_label: &'static str,
    pub form_service_placeholder: &'static str,
    pub form_message_label: &'static str,
    pub form_submit: &'static str,

    // ==================== Submission Feedback ====================
    /// Shown when a required field is missing
    pub feedback_missing_fields: &'static str,
    /// Shown when the email field fails the shape check
    pub feedback_invalid_email: &'static str,
    /// Shown after a successful delivery
    pub feedback_sent: &'static str,
    /// Shown when the mail relay fails; deliberately generic
    pub feedback_send_failed: &'static str,
}

/// Dictionary keys addressable by the metadata builder.
///
/// Pages resolve most strings through `Locale::strings()` directly; keyed
/// lookup exists for the call sites that receive the key as data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKey {
    AppTitle,
    MetaTitleHome,
    MetaDescHome,
    MetaTitleArchitecture,
    MetaDescArchitecture,
    MetaTitleConstruction,
    MetaDescConstruction,
    MetaTitleFinishes,
    MetaDescFinishes,
}

impl TextKey {
    /// Every addressable key, for exhaustive checks.
    pub const ALL: [TextKey; 9] = [
        TextKey::AppTitle,
        TextKey::MetaTitleHome,
        TextKey::MetaDescHome,
        TextKey::MetaTitleArchitecture,
        TextKey::MetaDescArchitecture,
        TextKey::MetaTitleConstruction,
        TextKey::MetaDescConstruction,
        TextKey::MetaTitleFinishes,
        TextKey::MetaDescFinishes,
    ];
}

fn lookup(key: TextKey, strings: &'static LocaleStrings) -> &'static str {
    match key {
        TextKey::AppTitle => strings.app_title,
        TextKey::MetaTitleHome => strings.meta_title_home,
        TextKey::MetaDescHome => strings.meta_desc_home,
        TextKey::MetaTitleArchitecture => strings.meta_title_architecture,
        TextKey::MetaDescArchitecture => strings.meta_desc_architecture,
        TextKey::MetaTitleConstruction => strings.meta_title_construction,
        TextKey::MetaDescConstruction => strings.meta_desc_construction,
        TextKey::MetaTitleFinishes => strings.meta_title_finishes,
        TextKey::MetaDescFinishes => strings.meta_desc_finishes,
    }
}

/// Resolve a dictionary key for a locale, falling back to the default
/// locale when the translation is empty.
pub fn t(key: TextKey, locale: Locale) -> &'static str {
    let resolved = lookup(key, locale.strings());
    if resolved.is_empty() {
        lookup(key, Locale::default().strings())
    } else {
        resolved
    }
}

// ==================== Spanish Strings ====================

/// Spanish strings (default, complete table)
pub const SPANISH_STRINGS: LocaleStrings = LocaleStrings {
    // Header / navigation
    app_title: "Servicios Generales Darikson",
    nav_architecture: "Arquitectura",
    nav_construction: "Construcción",

    // Hero
    hero_title: "Servicios Generales Darikson",
    hero_subtitle: "Diseño funcional, ejecución impecable y comunicación clara de principio a fin.",
    cta_primary: "Cotizar",
    cta_secondary: "Ver proyectos",

    // Page metadata
    meta_title_home: "Servicios Generales Darikson — Arquitectura y Construcción",
    meta_desc_home: "Diseño arquitectónico, construcción, acabados y supervisión técnica. \
Proyectos a medida con calidad, seguridad y entregas puntuales.",
    meta_title_finishes: "Acabados — Servicios Generales Darikson",
    meta_desc_finishes: "Acabados de alta calidad: drywall, vidrios, pintura, carpintería y más. \
Terminaciones limpias y duraderas.",
    meta_title_architecture: "Arquitectura — Servicios Generales Darikson",
    meta_desc_architecture: "Concepto, anteproyecto, planos ejecutivos y dirección. \
Compatibilización MEP y documentación clara.",
    meta_title_construction: "Construcción — Servicios Generales Darikson",
    meta_desc_construction: "Obra civil, instalaciones, seguridad y control de calidad. \
Planificación, costos y entregas por hitos.",

    // Contact form
    contact_heading: "Contáctame / Cotización",
    contact_intro: "Cuéntanos tu idea y te responderemos a la brevedad.",
    form_name_label: "Nombre",
    form_email_label: "Email",
    form_phone_label: "Teléfono",
    form_service_label: "Servicio",
    form_service_placeholder: "Selecciona una opción",
    form_message_label: "Mensaje / Idea",
    form_submit: "Enviar",

    // Submission feedback
    feedback_missing_fields: "Por favor completa nombre, email, servicio y mensaje.",
    feedback_invalid_email: "Email inválido.",
    feedback_sent: "¡Enviado! Te contactaremos pronto.",
    feedback_send_failed: "No se pudo enviar. Intenta nuevamente.",
};

// ==================== English Strings ====================

/// English strings
pub const ENGLISH_STRINGS: LocaleStrings = LocaleStrings {
    // Header / navigation
    app_title: "Darikson General Services",
    nav_architecture: "Architecture",
    nav_construction: "Construction",

    // Hero
    hero_title: "Darikson General Services",
    hero_subtitle: "Functional design, flawless execution, and clear communication from start to finish.",
    cta_primary: "Get a Quote",
    cta_secondary: "See projects",

    // Page metadata
    meta_title_home: "Darikson General Services — Architecture & Construction",
    meta_desc_home: "Architectural design, construction, finishes, and technical oversight. \
Tailored projects with quality, safety, and on-time delivery.",
    meta_title_finishes: "Finishes — Darikson General Services",
    meta_desc_finishes: "High-quality finishes: drywall, glass, painting, carpentry and more. \
Clean, durable results.",
    meta_title_architecture: "Architecture — Darikson General Services",
    meta_desc_architecture: "Concept, preliminary design, executive drawings and site supervision. \
MEP coordination and clear documentation.",
    meta_title_construction: "Construction — Darikson General Services",
    meta_desc_construction: "Civil works, installations, safety and quality control. \
Planning, budgeting and milestone-based delivery.",

    // Contact form
    contact_heading: "Contact / Quote",
    contact_intro: "Tell us about your idea and we'll get back to you shortly.",
    form_name_label: "Name",
    form_email_label: "Email",
    form_phone_label: "Phone",
    form_service_label: "Service",
    form_service_placeholder: "Select an option",
    form_message_label: "Message / Idea",
    form_submit: "Send",

    // Submission feedback
    feedback_missing_fields: "Please fill in name, email, service and message.",
    feedback_invalid_email: "Invalid email.",
    feedback_sent: "Sent! We'll be in touch soon.",
    feedback_send_failed: "Could not send. Please try again.",
};

#[cfg(test)]
mod tests {
    use super::*;

    fn all_fields(strings: &'static LocaleStrings) -> Vec<&'static str> {
        vec![
            strings.app_title,
            strings.nav_architecture,
            strings.nav_construction,
            strings.hero_title,
            strings.hero_subtitle,
            strings.cta_primary,
            strings.cta_secondary,
            strings.meta_title_home,
            strings.meta_desc_home,
            strings.meta_title_finishes,
            strings.meta_desc_finishes,
            strings.meta_title_architecture,
            strings.meta_desc_architecture,
            strings.meta_title_construction,
            strings.meta_desc_construction,
            strings.contact_heading,
            strings.contact_intro,
            strings.form_name_label,
            strings.form_email_label,
            strings.form_phone_label,
            strings.form_service_label,
            strings.form_service_placeholder,
            strings.form_message_label,
            strings.form_submit,
            strings.feedback_missing_fields,
            strings.feedback_invalid_email,
            strings.feedback_sent,
            strings.feedback_send_failed,
        ]
    }

    // ==================== Completeness Tests ====================

    #[test]
    fn test_spanish_table_has_no_empty_strings() {
        for field in all_fields(&SPANISH_STRINGS) {
            assert!(!field.is_empty());
        }
    }

    #[test]
    fn test_english_table_has_no_empty_strings() {
        for field in all_fields(&ENGLISH_STRINGS) {
            assert!(!field.is_empty());
        }
    }

    // ==================== Lookup Tests ====================

    #[test]
    fn test_t_resolves_per_locale() {
        assert_eq!(
            t(TextKey::MetaTitleHome, Locale::SPANISH),
            "Servicios Generales Darikson — Arquitectura y Construcción"
        );
        assert_eq!(
            t(TextKey::MetaTitleHome, Locale::ENGLISH),
            "Darikson General Services — Architecture & Construction"
        );
    }

    #[test]
    fn test_t_never_empty_for_any_key_and_locale() {
        for key in TextKey::ALL {
            for locale in [Locale::ENGLISH, Locale::SPANISH] {
                assert!(!t(key, locale).is_empty(), "{key:?} empty for {locale:?}");
            }
        }
    }

    #[test]
    fn test_app_title_matches_site_name() {
        assert_eq!(t(TextKey::AppTitle, Locale::SPANISH), "Servicios Generales Darikson");
        assert_eq!(t(TextKey::AppTitle, Locale::ENGLISH), "Darikson General Services");
    }
}
