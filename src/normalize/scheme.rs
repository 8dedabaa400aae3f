/// Source-key candidates for each canonical column, in preference order.
///
/// The WordPress forms label the same fields differently depending on which
/// site the form belongs to, and the labels have drifted between form
/// revisions. Every list therefore carries all known variants as fallbacks;
/// only the preference order changes per scheme.
pub struct FieldScheme {
    pub legal_name: &'static [&'static str],
    pub contact_name: &'static [&'static str],
    pub phone: &'static [&'static str],
    pub email: &'static [&'static str],
    pub message: &'static [&'static str],
    pub service: &'static [&'static str],
}

/// Form ids served from the INTRALOG site; everything else is INTRAPAL.
pub const INTRALOG_FORM_IDS: [u32; 3] = [3, 4, 5];

static INTRALOG_SCHEME: FieldScheme = FieldScheme {
    legal_name: &["Razón Social", "Razón social"],
    contact_name: &["Nombre y Apellido", "Nombre y apellido"],
    phone: &["Teléfono", "Telefono"],
    email: &["Correo electrónico", "E-Mail", "Mail"],
    message: &["Completa tu mensaje", "Mensaje"],
    service: &["Me interesa el servicio", "Servicio"],
};

static INTRAPAL_SCHEME: FieldScheme = FieldScheme {
    legal_name: &["Razón social", "Razón Social"],
    contact_name: &["Nombre y apellido", "Nombre y Apellido"],
    phone: &["Teléfono", "Telefono"],
    email: &["Mail", "E-Mail", "Correo electrónico"],
    message: &["Mensaje", "Completa tu mensaje"],
    service: &["Servicio", "Me interesa el servicio"],
};

pub fn scheme_for(form_id: u32) -> &'static FieldScheme {
    if INTRALOG_FORM_IDS.contains(&form_id) {
        &INTRALOG_SCHEME
    } else {
        &INTRAPAL_SCHEME
    }
}

pub fn company_for(form_id: u32) -> &'static str {
    if INTRALOG_FORM_IDS.contains(&form_id) {
        "INTRALOG"
    } else {
        "INTRAPAL"
    }
}
