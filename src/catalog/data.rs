//! Built-in catalog contents.

use crate::models::{LocalizedText, Service, ServiceCenter, ServiceType};

fn text(en: &str, ar: &str) -> LocalizedText {
    LocalizedText::new(en, ar)
}

fn interior() -> LocalizedText {
    text("Ministry of Interior", "وزارة الداخلية")
}

fn public_health() -> LocalizedText {
    text("Ministry of Public Health", "وزارة الصحة العامة")
}

fn municipality() -> LocalizedText {
    text("Ministry of Municipality", "وزارة البلدية")
}

fn commerce() -> LocalizedText {
    text("Ministry of Commerce and Industry", "وزارة التجارة والصناعة")
}

fn foreign_affairs() -> LocalizedText {
    text("Ministry of Foreign Affairs", "وزارة الخارجية")
}

fn education() -> LocalizedText {
    text(
        "Ministry of Education and Higher Education",
        "وزارة التربية والتعليم والتعليم العالي",
    )
}

fn centers(ids: &[&str]) -> Option<Vec<String>> {
    Some(ids.iter().map(|id| id.to_string()).collect())
}

pub(super) fn service_centers() -> Vec<ServiceCenter> {
    let hours = || text("Sun-Thu 7:00 AM - 6:00 PM", "الأحد-الخميس ٧:٠٠ ص - ٦:٠٠ م");
    vec![
        ServiceCenter {
            id: "sc-rayyan".to_string(),
            name: text("Al Rayyan Service Center", "مركز خدمات الريان"),
            address: text("Al Rayyan Road, Al Rayyan", "شارع الريان، الريان"),
            working_hours: hours(),
        },
        ServiceCenter {
            id: "sc-wakra".to_string(),
            name: text("Al Wakra Service Center", "مركز خدمات الوكرة"),
            address: text("Al Wakra Main Street, Al Wakra", "الشارع الرئيسي، الوكرة"),
            working_hours: hours(),
        },
        ServiceCenter {
            id: "sc-dafna".to_string(),
            name: text("Al Dafna Service Center", "مركز خدمات الدفنة"),
            address: text("Majlis Al Taawon Street, West Bay", "شارع مجلس التعاون، الخليج الغربي"),
            working_hours: hours(),
        },
        ServiceCenter {
            id: "sc-khor".to_string(),
            name: text("Al Khor Service Center", "مركز خدمات الخور"),
            address: text("Al Khor Coastal Road, Al Khor", "الطريق الساحلي، الخور"),
            working_hours: text("Sun-Thu 7:00 AM - 2:00 PM", "الأحد-الخميس ٧:٠٠ ص - ٢:٠٠ م"),
        },
    ]
}

pub(super) fn services() -> Vec<Service> {
    vec![
        Service {
            id: "police-clearance".to_string(),
            title: text("Police Clearance Certificate", "شهادة حسن السيرة والسلوك"),
            description: text(
                "Certificate confirming the applicant has no criminal record in Qatar.",
                "شهادة تثبت خلو سجل مقدم الطلب من السوابق الجنائية في قطر.",
            ),
            entity: interior(),
            cost: 100,
            currency: "QAR".to_string(),
            estimated_time: text("3 working days", "٣ أيام عمل"),
            category: "security".to_string(),
            service_type: ServiceType::IncompleteDigital,
            service_center_id: None,
            service_center_ids: centers(&["sc-rayyan", "sc-wakra", "sc-dafna"]),
        },
        Service {
            id: "residence-permit-renewal".to_string(),
            title: text("Residence Permit Renewal", "تجديد رخصة الإقامة"),
            description: text(
                "Renew a residence permit for yourself or a sponsored family member.",
                "تجديد رخصة الإقامة لك أو لأحد أفراد الأسرة المكفولين.",
            ),
            entity: interior(),
            cost: 500,
            currency: "QAR".to_string(),
            estimated_time: text("5 working days", "٥ أيام عمل"),
            category: "residency".to_string(),
            service_type: ServiceType::IncompleteDigital,
            service_center_id: None,
            service_center_ids: centers(&["sc-rayyan", "sc-dafna", "sc-khor"]),
        },
        Service {
            id: "passport-renewal".to_string(),
            title: text("Qatari Passport Renewal", "تجديد جواز السفر القطري"),
            description: text(
                "Renew an expiring travel document with biometric capture.",
                "تجديد وثيقة السفر المنتهية مع أخذ البصمات الحيوية.",
            ),
            entity: interior(),
            cost: 200,
            currency: "QAR".to_string(),
            estimated_time: text("7 working days", "٧ أيام عمل"),
            category: "residency".to_string(),
            service_type: ServiceType::IncompleteDigital,
            service_center_id: Some("sc-dafna".to_string()),
            service_center_ids: None,
        },
        Service {
            id: "traffic-violations".to_string(),
            title: text("Traffic Violations Inquiry", "الاستعلام عن المخالفات المرورية"),
            description: text(
                "View and pay outstanding traffic fines online.",
                "عرض ودفع المخالفات المرورية المستحقة إلكترونياً.",
            ),
            entity: interior(),
            cost: 0,
            currency: "QAR".to_string(),
            estimated_time: text("Instant", "فوري"),
            category: "transport".to_string(),
            service_type: ServiceType::Digital,
            service_center_id: None,
            service_center_ids: None,
        },
        Service {
            id: "driving-license-renewal".to_string(),
            title: text("Driving License Renewal", "تجديد رخصة القيادة"),
            description: text(
                "Renew a driving license after the required eye test.",
                "تجديد رخصة القيادة بعد إجراء فحص النظر المطلوب.",
            ),
            entity: interior(),
            cost: 250,
            currency: "QAR".to_string(),
            estimated_time: text("1 working day", "يوم عمل واحد"),
            category: "transport".to_string(),
            service_type: ServiceType::IncompleteDigital,
            service_center_id: None,
            service_center_ids: centers(&["sc-rayyan", "sc-wakra"]),
        },
        Service {
            id: "health-card-renewal".to_string(),
            title: text("Health Card Renewal", "تجديد البطاقة الصحية"),
            description: text(
                "Renew the health card used at public health centers.",
                "تجديد البطاقة الصحية المستخدمة في المراكز الصحية الحكومية.",
            ),
            entity: public_health(),
            cost: 100,
            currency: "QAR".to_string(),
            estimated_time: text("2 working days", "يوما عمل"),
            category: "health".to_string(),
            service_type: ServiceType::IncompleteDigital,
            service_center_id: None,
            service_center_ids: centers(&["sc-rayyan", "sc-wakra", "sc-khor"]),
        },
        Service {
            id: "medical-fitness".to_string(),
            title: text("Medical Fitness Certificate", "شهادة اللياقة الطبية"),
            description: text(
                "Request the medical fitness result issued after screening.",
                "طلب نتيجة اللياقة الطبية الصادرة بعد الفحص.",
            ),
            entity: public_health(),
            cost: 0,
            currency: "QAR".to_string(),
            estimated_time: text("Instant", "فوري"),
            category: "health".to_string(),
            service_type: ServiceType::Digital,
            service_center_id: None,
            service_center_ids: None,
        },
        Service {
            id: "building-permit".to_string(),
            title: text("Building Permit Request", "طلب رخصة بناء"),
            description: text(
                "Submit drawings and obtain a permit for new construction.",
                "تقديم المخططات والحصول على رخصة للبناء الجديد.",
            ),
            entity: municipality(),
            cost: 300,
            currency: "QAR".to_string(),
            estimated_time: text("10 working days", "١٠ أيام عمل"),
            category: "municipality".to_string(),
            service_type: ServiceType::IncompleteDigital,
            service_center_id: Some("sc-dafna".to_string()),
            service_center_ids: None,
        },
        Service {
            id: "commercial-registration".to_string(),
            title: text("Commercial Registration Renewal", "تجديد السجل التجاري"),
            description: text(
                "Renew a commercial registration for an existing company.",
                "تجديد السجل التجاري لشركة قائمة.",
            ),
            entity: commerce(),
            cost: 500,
            currency: "QAR".to_string(),
            estimated_time: text("Instant", "فوري"),
            category: "business".to_string(),
            service_type: ServiceType::Digital,
            service_center_id: None,
            service_center_ids: None,
        },
        Service {
            id: "trade-license".to_string(),
            title: text("Trade License Issuance", "إصدار الرخصة التجارية"),
            description: text(
                "Issue a trade license after the premises inspection.",
                "إصدار الرخصة التجارية بعد معاينة المحل.",
            ),
            entity: commerce(),
            cost: 1000,
            currency: "QAR".to_string(),
            estimated_time: text("5 working days", "٥ أيام عمل"),
            category: "business".to_string(),
            service_type: ServiceType::IncompleteDigital,
            service_center_id: None,
            service_center_ids: centers(&["sc-dafna", "sc-rayyan"]),
        },
        Service {
            id: "certificate-attestation".to_string(),
            title: text("Certificate Attestation", "توثيق الشهادات"),
            description: text(
                "Attest academic and personal documents issued abroad.",
                "توثيق الشهادات الدراسية والمستندات الشخصية الصادرة من الخارج.",
            ),
            entity: foreign_affairs(),
            cost: 50,
            currency: "QAR".to_string(),
            estimated_time: text("2 working days", "يوما عمل"),
            category: "documents".to_string(),
            service_type: ServiceType::IncompleteDigital,
            service_center_id: Some("sc-dafna".to_string()),
            service_center_ids: None,
        },
        Service {
            id: "school-registration".to_string(),
            title: text("Public School Registration", "التسجيل في المدارس الحكومية"),
            description: text(
                "Register a child in a public school for the coming academic year.",
                "تسجيل الطفل في مدرسة حكومية للعام الدراسي القادم.",
            ),
            entity: education(),
            cost: 0,
            currency: "QAR".to_string(),
            estimated_time: text("Instant", "فوري"),
            category: "education".to_string(),
            service_type: ServiceType::Digital,
            service_center_id: None,
            service_center_ids: None,
        },
    ]
}
