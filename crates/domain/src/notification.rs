use crate::{
    anniversary::AnniversaryKind,
    views::{BirthdayDepartment, SpecialAnniversary},
    Employee,
};

pub const BIRTHDAY_WISH_SUBJECT: &str = "eAnniversaires - Joyeux Anniversaire ! 🥳";
const SIGNATURE: &str = "Cordialement,<br>eAnniversaires";

#[derive(Debug, Clone, PartialEq)]
pub struct MailMessage {
    pub to: String,
    pub subject: String,
    pub html_body: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SmsMessage {
    pub to: String,
    pub body: String,
}

/// SMS gateways expect the international prefix as `00`
pub fn sms_number(tel_number: &str) -> String {
    tel_number.replace('+', "00")
}

/// `None` when the department does not notify by mail
pub fn birthday_wish_mail(
    employee: &Employee,
    department: &BirthdayDepartment,
) -> Option<MailMessage> {
    if !department.notify_by_mail {
        return None;
    }
    Some(MailMessage {
        to: employee.mail.clone(),
        subject: BIRTHDAY_WISH_SUBJECT.into(),
        html_body: format!("{}<br><br>{}", department.html_birthday_msg, SIGNATURE),
    })
}

/// `None` when the department does not notify by SMS
pub fn birthday_wish_sms(employee: &Employee, department: &BirthdayDepartment) -> Option<SmsMessage> {
    if !department.notify_by_sms {
        return None;
    }
    Some(SmsMessage {
        to: sms_number(&employee.tel_number),
        body: department.birthday_msg.clone(),
    })
}

pub fn manager_reminder_mail(anniversary: &SpecialAnniversary) -> MailMessage {
    let label = anniversary.event.label();
    let info = match anniversary.event.kind {
        AnniversaryKind::MilestoneHireAnniversary => format!(
            "On fête ses {} ans au sein de l'entreprise !!",
            anniversary.event.years
        ),
        _ => format!("On fête ses {} ans !!", anniversary.event.years),
    };
    let manager = &anniversary.manager;
    let employee = &anniversary.employee;

    let html_body = format!(
        "Bonjour {},<br><br>\
         Nous souhaitons vous informer que votre collaborateur {} du département {} \
         aura un {} dans {} jours ! 🥳<br><br>\
         {}<br><br>\
         Coordonnées :<br>\
         Email: {}<br>\
         Téléphone: {}<br><br>\
         {}",
        manager.full_name(),
        employee.full_name(),
        anniversary.department.name,
        label.to_lowercase(),
        anniversary.notification_delay,
        info,
        employee.mail,
        employee.tel_number,
        SIGNATURE
    );

    MailMessage {
        to: manager.mail.clone(),
        subject: format!("eAnniversaire - {} prochainement", label),
        html_body,
    }
}
