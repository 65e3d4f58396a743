use crate::flows::category::ServiceCategory;
use crate::i18n::tr;

use super::domain::{BillingMode, PackageInfo, ServiceItem};

/// The static service catalog backing the quote builder.
#[derive(Debug)]
pub struct ServiceCatalog {
    services: Vec<ServiceItem>,
    packages: Vec<PackageInfo>,
}

impl ServiceCatalog {
    /// Monthly fee auto-applied when a hosting-triggering service is selected.
    pub const HOSTING_FEE_MONTHLY: f64 = 50.0;
    /// The explicit hosting line item; when selected, its own price covers
    /// hosting and the auto-fee is suppressed.
    pub const HOSTING_SERVICE_ID: &'static str = "website-hosting";

    pub fn standard() -> Self {
        Self {
            services: standard_services(),
            packages: standard_packages(),
        }
    }

    pub fn service(&self, id: &str) -> Option<&ServiceItem> {
        self.services.iter().find(|service| service.id == id)
    }

    pub fn package(&self, id: &str) -> Option<&PackageInfo> {
        self.packages.iter().find(|package| package.id == id)
    }

    pub fn services(&self) -> &[ServiceItem] {
        &self.services
    }

    pub fn packages(&self) -> &[PackageInfo] {
        &self.packages
    }

    pub fn services_for_category(&self, category: ServiceCategory) -> Vec<&ServiceItem> {
        self.services
            .iter()
            .filter(|service| service.category == category)
            .collect()
    }
}

fn standard_services() -> Vec<ServiceItem> {
    vec![
        ServiceItem {
            id: "brand-strategy",
            category: ServiceCategory::Strategy,
            name: tr(
                "Brand & Marketing Strategy",
                "Estrategia de marca y marketing",
                "Stratégie de marque et marketing",
            ),
            description: tr(
                "Positioning, messaging, and a 90-day marketing roadmap.",
                "Posicionamiento, mensajes y hoja de ruta de 90 días.",
                "Positionnement, messages et feuille de route de 90 jours.",
            ),
            price: 1200.0,
            price_max: None,
            billing: BillingMode::OneTime,
            adjustable_quantity: false,
            unit: None,
            note: None,
            triggers_hosting: false,
        },
        ServiceItem {
            id: "marketing-audit",
            category: ServiceCategory::Strategy,
            name: tr(
                "Marketing Audit",
                "Auditoría de marketing",
                "Audit marketing",
            ),
            description: tr(
                "Full review of your current channels with prioritized fixes.",
                "Revisión completa de sus canales con mejoras priorizadas.",
                "Examen complet de vos canaux avec correctifs priorisés.",
            ),
            price: 450.0,
            price_max: None,
            billing: BillingMode::OneTime,
            adjustable_quantity: false,
            unit: None,
            note: None,
            triggers_hosting: false,
        },
        ServiceItem {
            id: "website-build",
            category: ServiceCategory::Website,
            name: tr(
                "Website Design & Build",
                "Diseño y desarrollo web",
                "Conception et développement de site",
            ),
            description: tr(
                "Custom responsive website designed and built from scratch.",
                "Sitio web responsivo diseñado y construido a medida.",
                "Site web responsive conçu et développé sur mesure.",
            ),
            price: 2500.0,
            price_max: Some(6000.0),
            billing: BillingMode::OneTime,
            adjustable_quantity: false,
            unit: None,
            note: Some(tr(
                "Final price depends on page count and integrations.",
                "El precio final depende del número de páginas e integraciones.",
                "Le prix final dépend du nombre de pages et des intégrations.",
            )),
            triggers_hosting: true,
        },
        ServiceItem {
            id: "landing-page",
            category: ServiceCategory::Website,
            name: tr("Landing Page", "Página de aterrizaje", "Page d'atterrissage"),
            description: tr(
                "Single conversion-focused page for a campaign or launch.",
                "Página única enfocada en conversión para una campaña.",
                "Page unique axée conversion pour une campagne.",
            ),
            price: 600.0,
            price_max: None,
            billing: BillingMode::OneTime,
            adjustable_quantity: true,
            unit: Some(tr("page", "página", "page")),
            note: None,
            triggers_hosting: true,
        },
        ServiceItem {
            id: "website-hosting",
            category: ServiceCategory::Website,
            name: tr("Website Hosting", "Alojamiento web", "Hébergement web"),
            description: tr(
                "Managed hosting, SSL, and backups for your site.",
                "Alojamiento gestionado, SSL y copias de seguridad.",
                "Hébergement géré, SSL et sauvegardes.",
            ),
            price: 50.0,
            price_max: None,
            billing: BillingMode::Monthly,
            adjustable_quantity: false,
            unit: None,
            note: None,
            triggers_hosting: false,
        },
        ServiceItem {
            id: "website-maintenance",
            category: ServiceCategory::Website,
            name: tr(
                "Website Maintenance",
                "Mantenimiento web",
                "Maintenance de site",
            ),
            description: tr(
                "Monthly updates, fixes, and small content changes.",
                "Actualizaciones, correcciones y cambios menores mensuales.",
                "Mises à jour, correctifs et petits changements mensuels.",
            ),
            price: 120.0,
            price_max: None,
            billing: BillingMode::Monthly,
            adjustable_quantity: false,
            unit: None,
            note: None,
            triggers_hosting: false,
        },
        ServiceItem {
            id: "ecommerce-store",
            category: ServiceCategory::Ecommerce,
            name: tr(
                "E-commerce Store",
                "Tienda en línea",
                "Boutique en ligne",
            ),
            description: tr(
                "Online store with payments, shipping, and tax setup.",
                "Tienda con pagos, envíos e impuestos configurados.",
                "Boutique avec paiements, livraison et taxes configurés.",
            ),
            price: 3800.0,
            price_max: Some(9000.0),
            billing: BillingMode::OneTime,
            adjustable_quantity: false,
            unit: None,
            note: None,
            triggers_hosting: true,
        },
        ServiceItem {
            id: "product-listing",
            category: ServiceCategory::Ecommerce,
            name: tr(
                "Product Listing Setup",
                "Carga de productos",
                "Mise en ligne de produits",
            ),
            description: tr(
                "Photography-ready product pages with descriptions and variants.",
                "Fichas de producto con descripciones y variantes.",
                "Fiches produit avec descriptions et variantes.",
            ),
            price: 15.0,
            price_max: None,
            billing: BillingMode::OneTime,
            adjustable_quantity: true,
            unit: Some(tr("product", "producto", "produit")),
            note: None,
            triggers_hosting: false,
        },
        ServiceItem {
            id: "social-media-management",
            category: ServiceCategory::SocialMedia,
            name: tr(
                "Social Media Management",
                "Gestión de redes sociales",
                "Gestion des réseaux sociaux",
            ),
            description: tr(
                "Content calendar, posting, and community management.",
                "Calendario de contenido, publicaciones y comunidad.",
                "Calendrier éditorial, publications et communauté.",
            ),
            price: 750.0,
            price_max: None,
            billing: BillingMode::Monthly,
            adjustable_quantity: false,
            unit: None,
            note: None,
            triggers_hosting: false,
        },
        ServiceItem {
            id: "social-media-setup",
            category: ServiceCategory::SocialMedia,
            name: tr(
                "Social Profiles Setup",
                "Configuración de perfiles",
                "Création de profils sociaux",
            ),
            description: tr(
                "Branded profiles on the channels that matter for you.",
                "Perfiles de marca en los canales relevantes.",
                "Profils de marque sur les canaux pertinents.",
            ),
            price: 350.0,
            price_max: None,
            billing: BillingMode::OneTime,
            adjustable_quantity: false,
            unit: None,
            note: None,
            triggers_hosting: false,
        },
        ServiceItem {
            id: "blog-articles",
            category: ServiceCategory::Content,
            name: tr("Blog Articles", "Artículos de blog", "Articles de blog"),
            description: tr(
                "SEO-informed articles written and published for you.",
                "Artículos optimizados escritos y publicados por nosotros.",
                "Articles optimisés rédigés et publiés pour vous.",
            ),
            price: 180.0,
            price_max: None,
            billing: BillingMode::Monthly,
            adjustable_quantity: true,
            unit: Some(tr("article / month", "artículo / mes", "article / mois")),
            note: None,
            triggers_hosting: false,
        },
        ServiceItem {
            id: "copywriting",
            category: ServiceCategory::Content,
            name: tr("Copywriting", "Redacción publicitaria", "Rédaction publicitaire"),
            description: tr(
                "Persuasive page copy aligned with your brand voice.",
                "Textos persuasivos alineados con su voz de marca.",
                "Textes persuasifs alignés sur votre image de marque.",
            ),
            price: 90.0,
            price_max: None,
            billing: BillingMode::OneTime,
            adjustable_quantity: true,
            unit: Some(tr("page", "página", "page")),
            note: None,
            triggers_hosting: false,
        },
        ServiceItem {
            id: "promo-video",
            category: ServiceCategory::VideoProduction,
            name: tr("Promotional Video", "Video promocional", "Vidéo promotionnelle"),
            description: tr(
                "Scripted, shot, and edited brand video up to 90 seconds.",
                "Video de marca guionado, grabado y editado hasta 90 s.",
                "Vidéo de marque scénarisée, tournée et montée jusqu'à 90 s.",
            ),
            price: 1500.0,
            price_max: Some(4000.0),
            billing: BillingMode::OneTime,
            adjustable_quantity: false,
            unit: None,
            note: None,
            triggers_hosting: false,
        },
        ServiceItem {
            id: "short-form-videos",
            category: ServiceCategory::VideoProduction,
            name: tr(
                "Short-form Video Pack",
                "Paquete de videos cortos",
                "Pack de vidéos courtes",
            ),
            description: tr(
                "Monthly batch of vertical clips for Reels, TikTok, and Shorts.",
                "Lote mensual de clips verticales para Reels y TikTok.",
                "Lot mensuel de clips verticaux pour Reels et TikTok.",
            ),
            price: 600.0,
            price_max: None,
            billing: BillingMode::Monthly,
            adjustable_quantity: false,
            unit: None,
            note: None,
            triggers_hosting: false,
        },
        ServiceItem {
            id: "email-marketing",
            category: ServiceCategory::Email,
            name: tr("Email Marketing", "Email marketing", "Email marketing"),
            description: tr(
                "Monthly campaigns and newsletter management.",
                "Campañas mensuales y gestión del boletín.",
                "Campagnes mensuelles et gestion de la newsletter.",
            ),
            price: 400.0,
            price_max: None,
            billing: BillingMode::Monthly,
            adjustable_quantity: false,
            unit: None,
            note: None,
            triggers_hosting: false,
        },
        ServiceItem {
            id: "email-automation-setup",
            category: ServiceCategory::Email,
            name: tr(
                "Email Automation Setup",
                "Automatización de correos",
                "Automatisation des emails",
            ),
            description: tr(
                "Welcome, abandoned-cart, and nurture sequences configured.",
                "Secuencias de bienvenida, carrito abandonado y nutrición.",
                "Séquences de bienvenue, panier abandonné et nurturing.",
            ),
            price: 700.0,
            price_max: None,
            billing: BillingMode::OneTime,
            adjustable_quantity: false,
            unit: None,
            note: None,
            triggers_hosting: false,
        },
        ServiceItem {
            id: "seo-audit",
            category: ServiceCategory::Seo,
            name: tr("SEO Audit", "Auditoría SEO", "Audit SEO"),
            description: tr(
                "Technical and content audit with a prioritized action plan.",
                "Auditoría técnica y de contenido con plan de acción.",
                "Audit technique et éditorial avec plan d'action.",
            ),
            price: 500.0,
            price_max: None,
            billing: BillingMode::OneTime,
            adjustable_quantity: false,
            unit: None,
            note: None,
            triggers_hosting: false,
        },
        ServiceItem {
            id: "seo-monthly",
            category: ServiceCategory::Seo,
            name: tr("Monthly SEO", "SEO mensual", "SEO mensuel"),
            description: tr(
                "Ongoing optimization, link building, and rank reporting.",
                "Optimización continua, enlaces y reportes de posiciones.",
                "Optimisation continue, netlinking et suivi des positions.",
            ),
            price: 650.0,
            price_max: None,
            billing: BillingMode::Monthly,
            adjustable_quantity: false,
            unit: None,
            note: None,
            triggers_hosting: false,
        },
        ServiceItem {
            id: "local-seo",
            category: ServiceCategory::Seo,
            name: tr("Local SEO", "SEO local", "SEO local"),
            description: tr(
                "Google Business Profile and local citations kept sharp.",
                "Perfil de Google Business y citas locales al día.",
                "Fiche Google Business et citations locales à jour.",
            ),
            price: 300.0,
            price_max: None,
            billing: BillingMode::Monthly,
            adjustable_quantity: false,
            unit: None,
            note: None,
            triggers_hosting: false,
        },
        ServiceItem {
            id: "ads-setup",
            category: ServiceCategory::Ads,
            name: tr(
                "Ad Account Setup",
                "Configuración de cuentas de anuncios",
                "Configuration des comptes publicitaires",
            ),
            description: tr(
                "Tracking, audiences, and first campaigns configured.",
                "Seguimiento, audiencias y primeras campañas.",
                "Tracking, audiences et premières campagnes.",
            ),
            price: 400.0,
            price_max: None,
            billing: BillingMode::OneTime,
            adjustable_quantity: false,
            unit: None,
            note: None,
            triggers_hosting: false,
        },
        ServiceItem {
            id: "google-ads",
            category: ServiceCategory::Ads,
            name: tr(
                "Google Ads Management",
                "Gestión de Google Ads",
                "Gestion Google Ads",
            ),
            description: tr(
                "Search and display campaigns managed and optimized monthly.",
                "Campañas de búsqueda y display optimizadas cada mes.",
                "Campagnes search et display optimisées chaque mois.",
            ),
            price: 550.0,
            price_max: None,
            billing: BillingMode::Monthly,
            adjustable_quantity: false,
            unit: None,
            note: Some(tr(
                "Ad spend billed separately by the platform.",
                "La inversión publicitaria se factura aparte.",
                "Le budget publicitaire est facturé à part.",
            )),
            triggers_hosting: false,
        },
        ServiceItem {
            id: "meta-ads",
            category: ServiceCategory::Ads,
            name: tr(
                "Meta Ads Management",
                "Gestión de Meta Ads",
                "Gestion Meta Ads",
            ),
            description: tr(
                "Facebook and Instagram campaigns managed and optimized.",
                "Campañas en Facebook e Instagram optimizadas.",
                "Campagnes Facebook et Instagram optimisées.",
            ),
            price: 500.0,
            price_max: None,
            billing: BillingMode::Monthly,
            adjustable_quantity: false,
            unit: None,
            note: Some(tr(
                "Ad spend billed separately by the platform.",
                "La inversión publicitaria se factura aparte.",
                "Le budget publicitaire est facturé à part.",
            )),
            triggers_hosting: false,
        },
        ServiceItem {
            id: "ai-chatbot",
            category: ServiceCategory::AiAutomation,
            name: tr("AI Chatbot", "Chatbot de IA", "Chatbot IA"),
            description: tr(
                "Site chatbot trained on your services and FAQ.",
                "Chatbot entrenado con sus servicios y preguntas frecuentes.",
                "Chatbot entraîné sur vos services et votre FAQ.",
            ),
            price: 900.0,
            price_max: Some(2500.0),
            billing: BillingMode::OneTime,
            adjustable_quantity: false,
            unit: None,
            note: None,
            triggers_hosting: false,
        },
        ServiceItem {
            id: "workflow-automation",
            category: ServiceCategory::AiAutomation,
            name: tr(
                "Workflow Automation",
                "Automatización de procesos",
                "Automatisation des processus",
            ),
            description: tr(
                "Leads, invoices, and follow-ups wired together and maintained.",
                "Leads, facturas y seguimientos conectados y mantenidos.",
                "Leads, factures et relances connectés et maintenus.",
            ),
            price: 450.0,
            price_max: None,
            billing: BillingMode::Monthly,
            adjustable_quantity: false,
            unit: None,
            note: None,
            triggers_hosting: false,
        },
    ]
}

fn standard_packages() -> Vec<PackageInfo> {
    vec![
        PackageInfo {
            id: "presence",
            name: tr("Presence", "Presencia", "Présence"),
            tagline: tr(
                "Stay visible: a maintained site plus local search and social.",
                "Manténgase visible: sitio mantenido, búsqueda local y redes.",
                "Restez visible : site maintenu, recherche locale et réseaux.",
            ),
            monthly_price: 1100.0,
            service_ids: &["website-maintenance", "local-seo", "social-media-management"],
        },
        PackageInfo {
            id: "growth",
            name: tr("Growth", "Crecimiento", "Croissance"),
            tagline: tr(
                "Compound traffic with SEO, email, and social working together.",
                "Tráfico compuesto con SEO, email y redes trabajando juntos.",
                "Du trafic durable avec SEO, email et réseaux combinés.",
            ),
            monthly_price: 1700.0,
            service_ids: &["seo-monthly", "email-marketing", "social-media-management"],
        },
        PackageInfo {
            id: "full-funnel",
            name: tr("Full Funnel", "Embudo completo", "Tunnel complet"),
            tagline: tr(
                "Everything from first click to repeat customer.",
                "Todo, desde el primer clic hasta el cliente recurrente.",
                "Tout, du premier clic au client fidèle.",
            ),
            monthly_price: 2600.0,
            service_ids: &[
                "seo-monthly",
                "google-ads",
                "meta-ads",
                "email-marketing",
                "website-maintenance",
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_ids_are_unique() {
        let catalog = ServiceCatalog::standard();
        let mut ids: Vec<&str> = catalog.services().iter().map(|s| s.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.services().len());
    }

    #[test]
    fn package_constituents_exist_in_catalog() {
        let catalog = ServiceCatalog::standard();
        for package in catalog.packages() {
            for id in package.service_ids {
                assert!(
                    catalog.service(id).is_some(),
                    "package {} references unknown service {id}",
                    package.id
                );
            }
        }
    }

    #[test]
    fn explicit_hosting_service_is_monthly_and_matches_fee() {
        let catalog = ServiceCatalog::standard();
        let hosting = catalog
            .service(ServiceCatalog::HOSTING_SERVICE_ID)
            .expect("hosting service present");
        assert_eq!(hosting.billing, BillingMode::Monthly);
        assert_eq!(hosting.price, ServiceCatalog::HOSTING_FEE_MONTHLY);
        assert!(!hosting.triggers_hosting);
    }

    #[test]
    fn every_category_has_at_least_one_service() {
        let catalog = ServiceCatalog::standard();
        for category in ServiceCategory::ordered() {
            assert!(
                !catalog.services_for_category(category).is_empty(),
                "no services for {category:?}"
            );
        }
    }
}
