use crate::flows::category::ServiceCategory;
use crate::i18n::tr;

use super::domain::{AssessmentAnswer, AssessmentOption, AssessmentQuestion};

/// The static battery of assessment questions.
#[derive(Debug)]
pub struct QuestionBank {
    questions: Vec<AssessmentQuestion>,
}

impl QuestionBank {
    pub fn standard() -> Self {
        Self {
            questions: standard_questions(),
        }
    }

    pub fn questions(&self) -> &[AssessmentQuestion] {
        &self.questions
    }

    pub fn question(&self, id: &str) -> Option<&AssessmentQuestion> {
        self.questions.iter().find(|question| question.id == id)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Build an answer record with the score read from the bank, so recorded
    /// scores can never drift from the option actually chosen.
    pub fn answer(&self, question_id: &str, option_index: usize) -> Option<AssessmentAnswer> {
        let question = self.question(question_id)?;
        let option = question.options.get(option_index)?;
        Some(AssessmentAnswer {
            question_id: question.id.to_string(),
            option_index,
            score: option.score,
        })
    }

    pub fn question_count(&self, category: ServiceCategory) -> usize {
        self.questions
            .iter()
            .filter(|question| question.category == category)
            .count()
    }
}

fn yes_somewhat_no() -> Vec<AssessmentOption> {
    vec![
        AssessmentOption {
            text: tr("Yes, consistently", "Sí, de forma consistente", "Oui, de façon régulière"),
            score: 5,
        },
        AssessmentOption {
            text: tr("Somewhat / in progress", "Parcialmente / en progreso", "Partiellement / en cours"),
            score: 2,
        },
        AssessmentOption {
            text: tr("No, not yet", "No, todavía no", "Non, pas encore"),
            score: 0,
        },
    ]
}

fn yes_no() -> Vec<AssessmentOption> {
    vec![
        AssessmentOption {
            text: tr("Yes", "Sí", "Oui"),
            score: 5,
        },
        AssessmentOption {
            text: tr("No", "No", "Non"),
            score: 0,
        },
    ]
}

fn standard_questions() -> Vec<AssessmentQuestion> {
    vec![
        AssessmentQuestion {
            id: "strategy-goals",
            category: ServiceCategory::Strategy,
            text: tr(
                "Do you have written marketing goals with numbers attached?",
                "¿Tiene metas de marketing por escrito con números concretos?",
                "Avez-vous des objectifs marketing écrits et chiffrés ?",
            ),
            options: yes_somewhat_no(),
        },
        AssessmentQuestion {
            id: "strategy-audience",
            category: ServiceCategory::Strategy,
            text: tr(
                "Can you describe your ideal customer in one sentence?",
                "¿Puede describir a su cliente ideal en una frase?",
                "Pouvez-vous décrire votre client idéal en une phrase ?",
            ),
            options: yes_somewhat_no(),
        },
        AssessmentQuestion {
            id: "strategy-budget",
            category: ServiceCategory::Strategy,
            text: tr(
                "Do you track what each marketing channel costs and returns?",
                "¿Sabe cuánto cuesta y cuánto devuelve cada canal de marketing?",
                "Suivez-vous le coût et le retour de chaque canal marketing ?",
            ),
            options: yes_somewhat_no(),
        },
        AssessmentQuestion {
            id: "website-exists",
            category: ServiceCategory::Website,
            text: tr(
                "Does your business have a website you are proud to share?",
                "¿Su negocio tiene un sitio web que le enorgullece compartir?",
                "Votre entreprise a-t-elle un site que vous êtes fier de partager ?",
            ),
            options: yes_somewhat_no(),
        },
        AssessmentQuestion {
            id: "website-mobile",
            category: ServiceCategory::Website,
            text: tr(
                "Does your site load fast and look right on a phone?",
                "¿Su sitio carga rápido y se ve bien en el móvil?",
                "Votre site est-il rapide et lisible sur mobile ?",
            ),
            options: yes_somewhat_no(),
        },
        AssessmentQuestion {
            id: "website-updates",
            category: ServiceCategory::Website,
            text: tr(
                "Is the site updated at least monthly?",
                "¿El sitio se actualiza al menos una vez al mes?",
                "Le site est-il mis à jour au moins une fois par mois ?",
            ),
            options: yes_somewhat_no(),
        },
        AssessmentQuestion {
            id: "ecommerce-online-sales",
            category: ServiceCategory::Ecommerce,
            text: tr(
                "Can customers buy from you online today?",
                "¿Sus clientes pueden comprarle en línea hoy?",
                "Vos clients peuvent-ils acheter en ligne aujourd'hui ?",
            ),
            options: yes_no(),
        },
        AssessmentQuestion {
            id: "ecommerce-checkout",
            category: ServiceCategory::Ecommerce,
            text: tr(
                "Is your checkout tested and friction-free on mobile?",
                "¿Su proceso de compra está probado y sin fricción en móvil?",
                "Votre parcours d'achat est-il testé et fluide sur mobile ?",
            ),
            options: yes_somewhat_no(),
        },
        AssessmentQuestion {
            id: "social-active",
            category: ServiceCategory::SocialMedia,
            text: tr(
                "Do you post on social media at least weekly?",
                "¿Publica en redes sociales al menos una vez por semana?",
                "Publiez-vous sur les réseaux au moins une fois par semaine ?",
            ),
            options: yes_somewhat_no(),
        },
        AssessmentQuestion {
            id: "social-engagement",
            category: ServiceCategory::SocialMedia,
            text: tr(
                "Do you reply to comments and messages within a day?",
                "¿Responde comentarios y mensajes en menos de un día?",
                "Répondez-vous aux commentaires et messages sous 24 h ?",
            ),
            options: yes_somewhat_no(),
        },
        AssessmentQuestion {
            id: "content-calendar",
            category: ServiceCategory::Content,
            text: tr(
                "Do you publish fresh content (blog, guides) on a schedule?",
                "¿Publica contenido nuevo (blog, guías) con regularidad?",
                "Publiez-vous du contenu frais (blog, guides) régulièrement ?",
            ),
            options: yes_somewhat_no(),
        },
        AssessmentQuestion {
            id: "content-voice",
            category: ServiceCategory::Content,
            text: tr(
                "Does your copy sound like your brand everywhere it appears?",
                "¿Sus textos suenan a su marca en todos los canales?",
                "Vos textes reflètent-ils votre marque sur tous les canaux ?",
            ),
            options: yes_somewhat_no(),
        },
        AssessmentQuestion {
            id: "video-presence",
            category: ServiceCategory::VideoProduction,
            text: tr(
                "Do you use video to present your products or services?",
                "¿Usa video para presentar sus productos o servicios?",
                "Utilisez-vous la vidéo pour présenter vos offres ?",
            ),
            options: yes_somewhat_no(),
        },
        AssessmentQuestion {
            id: "video-short-form",
            category: ServiceCategory::VideoProduction,
            text: tr(
                "Are you publishing short vertical videos (Reels, TikTok, Shorts)?",
                "¿Publica videos verticales cortos (Reels, TikTok, Shorts)?",
                "Publiez-vous des vidéos verticales courtes (Reels, TikTok, Shorts) ?",
            ),
            options: yes_no(),
        },
        AssessmentQuestion {
            id: "email-list",
            category: ServiceCategory::Email,
            text: tr(
                "Are you growing an email list you can contact any time?",
                "¿Está creciendo una lista de correos que puede contactar?",
                "Développez-vous une liste email que vous pouvez contacter ?",
            ),
            options: yes_somewhat_no(),
        },
        AssessmentQuestion {
            id: "email-automation",
            category: ServiceCategory::Email,
            text: tr(
                "Do new contacts get an automated welcome or follow-up sequence?",
                "¿Los nuevos contactos reciben una secuencia automática?",
                "Les nouveaux contacts reçoivent-ils une séquence automatisée ?",
            ),
            options: yes_no(),
        },
        AssessmentQuestion {
            id: "seo-rankings",
            category: ServiceCategory::Seo,
            text: tr(
                "Do you appear on the first page for searches that matter to you?",
                "¿Aparece en la primera página para las búsquedas que le importan?",
                "Apparaissez-vous en première page sur vos recherches clés ?",
            ),
            options: yes_somewhat_no(),
        },
        AssessmentQuestion {
            id: "seo-local",
            category: ServiceCategory::Seo,
            text: tr(
                "Is your Google Business Profile claimed and kept current?",
                "¿Su perfil de Google Business está reclamado y al día?",
                "Votre fiche Google Business est-elle revendiquée et à jour ?",
            ),
            options: yes_somewhat_no(),
        },
        AssessmentQuestion {
            id: "seo-tracking",
            category: ServiceCategory::Seo,
            text: tr(
                "Do you review search traffic and rankings monthly?",
                "¿Revisa tráfico de búsqueda y posiciones cada mes?",
                "Analysez-vous trafic et positions chaque mois ?",
            ),
            options: yes_somewhat_no(),
        },
        AssessmentQuestion {
            id: "ads-running",
            category: ServiceCategory::Ads,
            text: tr(
                "Are you running paid campaigns (Google, Meta) right now?",
                "¿Tiene campañas de pago activas (Google, Meta)?",
                "Menez-vous des campagnes payantes (Google, Meta) actuellement ?",
            ),
            options: yes_no(),
        },
        AssessmentQuestion {
            id: "ads-conversion",
            category: ServiceCategory::Ads,
            text: tr(
                "Do you know your cost per lead or sale from ads?",
                "¿Conoce su costo por lead o venta en anuncios?",
                "Connaissez-vous votre coût par lead ou vente publicitaire ?",
            ),
            options: yes_somewhat_no(),
        },
        AssessmentQuestion {
            id: "ai-responses",
            category: ServiceCategory::AiAutomation,
            text: tr(
                "Do website visitors get instant answers, even off-hours?",
                "¿Los visitantes reciben respuestas al instante, incluso fuera de horario?",
                "Vos visiteurs obtiennent-ils des réponses immédiates, même hors horaires ?",
            ),
            options: yes_somewhat_no(),
        },
        AssessmentQuestion {
            id: "ai-repetitive",
            category: ServiceCategory::AiAutomation,
            text: tr(
                "Are repetitive tasks (follow-ups, invoicing) automated?",
                "¿Las tareas repetitivas (seguimientos, facturas) están automatizadas?",
                "Vos tâches répétitives (relances, factures) sont-elles automatisées ?",
            ),
            options: yes_somewhat_no(),
        },
        AssessmentQuestion {
            id: "ai-data",
            category: ServiceCategory::AiAutomation,
            text: tr(
                "Does your customer data flow into one system automatically?",
                "¿Sus datos de clientes fluyen a un solo sistema automáticamente?",
                "Vos données clients arrivent-elles automatiquement dans un seul outil ?",
            ),
            options: yes_somewhat_no(),
        },
    ]
}
