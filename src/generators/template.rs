//! Two-page bilingual CV laid out as a self-contained HTML document.
//!
//! Page 1 carries the biodata, skills and photos; page 2 is the passport copy.
//! The output is fed straight into the PDF engine, so it embeds every image as
//! a `data:` URI and only references remote web fonts.

use crate::cv::image::{data_uri_or_placeholder, CvImages, ImageAsset};
use crate::cv::models::{CandidateRecord, ExperienceEntry, MedicalFitness, SkillLevel, SKILL_CATEGORIES};

use super::common::escape_html;
use super::layout::{Branding, LayoutConfig};
use super::translation::{Table, TranslationTables};
use super::transliteration::transliterate;

const FONTS_URL: &str = "https://fonts.googleapis.com/css2?family=Cairo:wght@400;600;700;800&family=Tajawal:wght@400;500;700&display=swap";

fn text(value: &Option<String>) -> &str {
    value.as_deref().map(str::trim).unwrap_or("")
}

/// Append a unit label only when there is a value to label.
fn with_unit(value: &str, unit: &str) -> String {
    if value.is_empty() {
        String::new()
    } else {
        format!("{value} {unit}")
    }
}

/// Renders candidate records into printable HTML.
pub struct CvTemplate {
    logo_uri: String,
    layout: LayoutConfig,
    branding: Branding,
    tables: TranslationTables,
}

impl CvTemplate {
    pub fn new(logo: &ImageAsset, layout: LayoutConfig, branding: Branding, tables: TranslationTables) -> Self {
        Self {
            logo_uri: logo.to_data_uri(),
            layout,
            branding,
            tables,
        }
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Build the full document. Never fails: missing data renders blank.
    pub fn render(&self, record: &CandidateRecord, images: &CvImages) -> String {
        let profile = data_uri_or_placeholder(images.profile.as_ref());
        let full_photo = data_uri_or_placeholder(images.full_body.as_ref());
        let passport = data_uri_or_placeholder(images.passport.as_ref());

        format!(
            r#"<!DOCTYPE html>
<html dir="rtl" lang="ar">
<head>
<meta charset="UTF-8">
<title>{title}</title>
<style>
{css}
</style>
</head>
<body>
{page1}
{page2}
</body>
</html>"#,
            title = escape_html(&format!("CV {}", text(&record.full_name))),
            css = self.stylesheet(),
            page1 = self.content_page(record, &profile, &full_photo),
            page2 = self.passport_page(record, &passport),
        )
    }

    /// Arabic display name: the supplied one, else a transliteration, else the Latin name.
    pub fn display_name_ar(&self, record: &CandidateRecord) -> String {
        let supplied = text(&record.full_name_ar);
        if !supplied.is_empty() {
            return supplied.to_string();
        }
        let latin = text(&record.full_name);
        let guessed = transliterate(latin);
        if guessed.is_empty() {
            latin.to_string()
        } else {
            guessed
        }
    }

    fn stylesheet(&self) -> String {
        let c = &self.layout.palette;
        let l = &self.layout;
        format!(
            r#"@import url('{fonts}');
@page {{ size: A4; margin: 0; }}
* {{ margin:0; padding:0; box-sizing:border-box; }}
body {{ font-family: 'Cairo', 'Tajawal', sans-serif; background:{white}; color:{dark}; }}
.page {{ width:210mm; height:297mm; position:relative; overflow:hidden; page-break-after:always; }}
.page:last-child {{ page-break-after:auto; }}
.header {{ background:linear-gradient(135deg,{pd},{pm}); height:72px; padding:0 22px; display:flex; justify-content:space-between; align-items:center; }}
.brand {{ display:flex; align-items:center; gap:12px; }}
.logo {{ height:52px; }}
.brand-ar {{ color:{white}; font-size:{f16}; font-weight:800; }}
.brand-en {{ color:rgba(255,255,255,0.8); font-size:{f9}; letter-spacing:0.5px; }}
.passport-badge {{ text-align:left; direction:ltr; }}
.passport-badge .label {{ color:rgba(255,255,255,0.55); font-size:{f7}; text-transform:uppercase; letter-spacing:2px; }}
.passport-badge .value {{ color:{white}; font-size:{f15}; font-weight:700; letter-spacing:2.5px; }}
.gold-line {{ height:3px; background:linear-gradient(90deg,{gold},{accent},{gold}); }}
.hero {{ display:flex; padding:14px 22px 12px; gap:16px; background:linear-gradient(180deg,{bg},{white}); border-bottom:2px solid {line}; }}
.profile-photo {{ width:{pw}px; height:{ph}px; object-fit:cover; border-radius:8px; border:3px solid {pm}; }}
.name-ar {{ font-size:{f24}; font-weight:800; color:{pd}; line-height:1.2; }}
.name-en {{ font-size:{f13}; color:{muted}; margin-bottom:10px; direction:ltr; text-align:right; }}
.pills {{ display:flex; flex-wrap:wrap; gap:6px; }}
.pill {{ background:{white}; border:1px solid {line}; border-radius:15px; padding:3px 12px; font-size:{f8_5}; }}
.pill .k {{ color:{muted}; font-size:{f7_5}; }}
.pill b {{ color:{pd}; }}
.pill.highlight {{ background:{pm}; color:{white}; font-weight:600; border:none; }}
.main {{ display:flex; padding:10px 18px; gap:14px; }}
.info {{ flex:1; min-width:0; }}
.section-title {{ font-size:{f11}; font-weight:700; color:{pd}; padding:5px 0; margin-bottom:4px; border-bottom:2.5px solid {pm}; }}
.section-title span {{ font-size:{f8}; color:{muted}; font-weight:400; }}
table {{ width:100%; border-collapse:collapse; margin-bottom:8px; }}
td.key {{ padding:5px 10px; font-size:{f9_5}; color:{muted}; background:{bg}; width:44%; border-bottom:1px solid {white}; }}
td.key span {{ font-size:{f7_5}; color:#999; }}
td.val {{ padding:5px 10px; font-size:{f10}; font-weight:600; color:{dark}; border-bottom:1px solid {line}; }}
th {{ background:{pd}; color:{white}; padding:5px 10px; font-size:{f8}; text-align:right; }}
tr.exp-row td {{ padding:5px 10px; font-size:{f8_5}; border-bottom:1px solid {line}; }}
tr.exp-empty td {{ padding:6px; font-size:{f8_5}; color:{muted}; text-align:center; }}
td.medical {{ padding:5px 10px; font-size:{f11}; font-weight:700; border-bottom:1px solid {line}; }}
td.medical.fit {{ color:{positive}; }}
td.medical.unfit {{ color:{negative}; }}
td.medical.pending {{ color:{pending}; }}
.side {{ width:{sw}px; flex-shrink:0; }}
tr.skill-row td {{ padding:3px 4px; border-bottom:1px solid {line}; }}
td.skill-name {{ font-size:{f8_5}; color:{dark}; }}
td.skill-name span {{ font-size:{f6_5}; color:{muted}; }}
td.skill-label {{ font-size:{f7_5}; color:{pm}; text-align:center; font-weight:700; }}
.bar {{ direction:ltr; display:inline-flex; }}
.seg {{ display:inline-block; width:16px; height:8px; border-radius:2px; margin-left:2px; }}
.seg-on {{ background:{pm}; }}
.seg-off {{ background:{line}; }}
.full-photo {{ width:{fw}px; height:{fh}px; object-fit:cover; object-position:top; border-radius:8px; border:2px solid {line}; }}
.agency {{ margin-top:8px; text-align:center; padding:6px; background:{bg}; border-radius:6px; border:1px solid {line}; }}
.agency .k {{ font-size:{f7}; color:{muted}; }}
.agency .v {{ font-size:{f9_5}; font-weight:700; color:{pd}; }}
.footer {{ position:absolute; bottom:0; left:0; right:0; background:linear-gradient(135deg,{pd},{navy}); padding:9px 22px; display:flex; justify-content:space-between; align-items:center; direction:ltr; }}
.phones {{ color:{white}; font-size:{f8_5}; display:flex; gap:14px; }}
.contact {{ text-align:right; }}
.contact .email {{ color:{gold}; font-size:{f8}; }}
.contact .address {{ color:rgba(255,255,255,0.7); font-size:{f7}; direction:rtl; }}
.side-accent {{ position:absolute; top:75px; left:0; width:3px; height:calc(100% - 112px); background:linear-gradient(180deg,{pm},{accent},{gold}); }}
.passport-section {{ text-align:center; padding:35px 40px 20px; }}
.passport-title {{ font-size:{f22}; font-weight:800; color:{pd}; margin-bottom:4px; }}
.passport-subtitle {{ font-size:{f13}; color:{muted}; margin-bottom:30px; }}
.passport-frame {{ display:inline-block; padding:14px; border:2px solid {line}; border-radius:14px; background:{white}; }}
.passport-scan {{ max-width:{pmw}px; width:100%; height:auto; border-radius:6px; }}
.confirm {{ margin-top:30px; display:inline-block; padding:12px 30px; background:{bg}; border-radius:10px; border:1px solid {line}; }}
.confirm .ar {{ font-size:{f18}; font-weight:800; color:{pd}; }}
.confirm .en {{ font-size:{f12}; color:{muted}; margin-top:3px; }}
.confirm .pp {{ font-size:{f11}; color:{pm}; margin-top:5px; direction:ltr; letter-spacing:2px; }}"#,
            fonts = FONTS_URL,
            white = c.white,
            dark = c.text_dark,
            muted = c.text_muted,
            pd = c.primary_dark,
            pm = c.primary,
            accent = c.accent,
            navy = c.navy,
            gold = c.gold,
            line = c.line,
            bg = c.background,
            positive = c.positive,
            negative = c.negative,
            pending = c.pending,
            pw = l.profile_photo.width,
            ph = l.profile_photo.height,
            fw = l.full_photo.width,
            fh = l.full_photo.height,
            sw = l.skills_panel_width,
            pmw = l.passport_max_width,
            f6_5 = l.font(6.5),
            f7 = l.font(7.0),
            f7_5 = l.font(7.5),
            f8 = l.font(8.0),
            f8_5 = l.font(8.5),
            f9 = l.font(9.0),
            f9_5 = l.font(9.5),
            f10 = l.font(10.0),
            f11 = l.font(11.0),
            f12 = l.font(12.0),
            f13 = l.font(13.0),
            f15 = l.font(15.0),
            f16 = l.font(16.0),
            f18 = l.font(18.0),
            f22 = l.font(22.0),
            f24 = l.font(24.0),
        )
    }

    fn header(&self, record: &CandidateRecord) -> String {
        format!(
            r#"  <div class="header">
    <div class="brand">
      <img class="logo" src="{logo}" />
      <div>
        <div class="brand-ar">{name_ar}</div>
        <div class="brand-en">{name_en}</div>
      </div>
    </div>
    <div class="passport-badge">
      <div class="label">Passport No.</div>
      <div class="value">{passport}</div>
    </div>
  </div>
  <div class="gold-line"></div>"#,
            logo = self.logo_uri,
            name_ar = escape_html(&self.branding.name_ar),
            name_en = escape_html(&self.branding.name_en),
            passport = escape_html(text(&record.passport_number)),
        )
    }

    fn footer(&self) -> String {
        let phones: String = self
            .branding
            .phones
            .iter()
            .map(|p| format!("<span>☎ {}</span>", escape_html(p)))
            .collect();
        format!(
            r#"  <div class="footer">
    <div class="phones">{phones}</div>
    <div class="contact">
      <div class="email">{email}</div>
      <div class="address">{address}</div>
    </div>
  </div>
  <div class="side-accent"></div>"#,
            email = escape_html(&self.branding.email),
            address = escape_html(&self.branding.address_ar),
        )
    }

    fn content_page(&self, record: &CandidateRecord, profile: &str, full_photo: &str) -> String {
        format!(
            r#"<div class="page">
{header}
  <div class="hero">
    <div><img class="profile-photo" src="{profile}" /></div>
    <div style="flex:1;">
      <div class="name-ar">{name_ar}</div>
      <div class="name-en">{name_en}</div>
      <div class="pills">{pills}</div>
    </div>
  </div>
  <div class="main">
    <div class="info">
{sections}
    </div>
    <div class="side">
      {skills_title}
      <table>{skills}</table>
      <img class="full-photo" src="{full_photo}" />
      <div class="agency">
        <div class="k">الوكالة / Agency</div>
        <div class="v">{agency}</div>
      </div>
    </div>
  </div>
{footer}
</div>"#,
            header = self.header(record),
            name_ar = escape_html(&self.display_name_ar(record)),
            name_en = escape_html(text(&record.full_name)),
            pills = self.pills(record),
            sections = self.info_sections(record),
            skills_title = section_title("المهارات", "Skills"),
            skills = self.skill_rows(record),
            agency = escape_html(text(&record.agency_name)),
            footer = self.footer(),
        )
    }

    fn passport_page(&self, record: &CandidateRecord, passport: &str) -> String {
        format!(
            r#"<div class="page">
{header}
  <div class="passport-section">
    <div class="passport-title">صورة جواز السفر</div>
    <div class="passport-subtitle">Passport Copy</div>
    <div class="passport-frame"><img class="passport-scan" src="{passport}" /></div>
    <div>
      <div class="confirm">
        <div class="ar">{name_ar}</div>
        <div class="en">{name_en}</div>
        <div class="pp">Passport: {number}</div>
      </div>
    </div>
  </div>
{footer}
</div>"#,
            header = self.header(record),
            name_ar = escape_html(&self.display_name_ar(record)),
            name_en = escape_html(text(&record.full_name)),
            number = escape_html(text(&record.passport_number)),
            footer = self.footer(),
        )
    }

    fn pills(&self, record: &CandidateRecord) -> String {
        let t = &self.tables;
        let children = text(&record.number_of_children);
        let children = if children.is_empty() { "0" } else { children };

        [
            pill("الجنسية", t.translate(Table::Nationality, text(&record.nationality))),
            pill("الديانة", t.translate(Table::Religion, text(&record.religion))),
            pill("العمر", &with_unit(text(&record.age), "سنة")),
            pill("الحالة", t.translate(Table::MaritalStatus, text(&record.marital_status))),
            pill("الأولاد", children),
            pill("الراتب", &with_unit(text(&record.monthly_salary), "ريال")),
            format!(
                r#"<span class="pill highlight">{}</span>"#,
                escape_html(t.translate(Table::Profession, text(&record.profession)))
            ),
        ]
        .join("\n        ")
    }

    fn bilingual(&self, table: Table, value: &Option<String>) -> String {
        let value = text(value);
        if value.is_empty() {
            String::new()
        } else {
            self.tables.bilingual(table, value)
        }
    }

    fn info_sections(&self, record: &CandidateRecord) -> String {
        let children = text(&record.number_of_children);
        let children = if children.is_empty() { "0" } else { children };
        let contract = text(&record.contract_period);
        let contract = if contract.is_empty() { "2" } else { contract };

        let personal = [
            info_row("الاسم الكامل", "Full Name", text(&record.full_name)),
            info_row("الجنس", "Gender", &self.bilingual(Table::Gender, &record.gender)),
            info_row("تاريخ الميلاد", "Date of Birth", text(&record.date_of_birth)),
            info_row("الجنسية", "Nationality", &self.bilingual(Table::Nationality, &record.nationality)),
            info_row("الديانة", "Religion", &self.bilingual(Table::Religion, &record.religion)),
            info_row(
                "الحالة الاجتماعية",
                "Marital Status",
                &self.bilingual(Table::MaritalStatus, &record.marital_status),
            ),
            info_row("عدد الأولاد", "Children", children),
            info_row("رقم الجوال", "Mobile", text(&record.mobile_number)),
            info_row("الإقامة الحالية", "Residence", text(&record.current_residence)),
        ];

        let job = [
            info_row("المهنة", "Profession", &self.bilingual(Table::Profession, &record.profession)),
            info_row(
                "الراتب الشهري",
                "Monthly Salary",
                &with_unit(text(&record.monthly_salary), "ريال / SAR"),
            ),
            info_row("مدة العقد", "Contract Period", &format!("{contract} سنة / Years")),
        ];

        let passport = [
            info_row("رقم الجواز", "Passport No.", text(&record.passport_number)),
            info_row("تاريخ الإصدار", "Issue Date", text(&record.passport_issue_date)),
            info_row("تاريخ الانتهاء", "Expiry Date", text(&record.passport_expiry_date)),
        ];

        let education = [
            info_row("المستوى التعليمي", "Education", &self.bilingual(Table::Education, &record.education_level)),
            info_row("اللغة الإنجليزية", "English", &self.bilingual(Table::Language, &record.english_level)),
            info_row("اللغة العربية", "Arabic", &self.bilingual(Table::Language, &record.arabic_level)),
        ];

        let physical = [
            info_row("الطول", "Height", &with_unit(text(&record.height_cm), "سم / cm")),
            info_row("الوزن", "Weight", &with_unit(text(&record.weight_kg), "كغ / kg")),
            medical_row(record.medical_fit),
        ];

        [
            section("المعلومات الشخصية", "Personal Information", &personal.join("")),
            section("معلومات العمل", "Job Information", &job.join("")),
            section("بيانات جواز السفر", "Passport Details", &passport.join("")),
            section("التعليم واللغات", "Education & Languages", &education.join("")),
            section("الخبرات العملية", "Work Experience", &experience_table(&record.experience_abroad)),
            section("المعلومات الجسدية", "Physical Information", &physical.join("")),
        ]
        .join("\n")
    }

    fn skill_rows(&self, record: &CandidateRecord) -> String {
        SKILL_CATEGORIES
            .iter()
            .map(|(key, ar, en)| {
                let raw = record.skill(key);
                let level = SkillLevel::parse(raw);
                format!(
                    r#"<tr class="skill-row" data-skill="{key}"><td class="skill-name">{ar}<br><span>{en}</span></td><td style="text-align:center;">{bar}</td><td class="skill-label">{label}</td></tr>"#,
                    bar = skill_bar(level.ordinal(), self.layout.skill_segments),
                    label = escape_html(self.tables.translate(Table::Skill, raw)),
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Bar of `total` segments with the first `filled` highlighted.
pub fn skill_bar(filled: usize, total: usize) -> String {
    let segments: String = (0..total)
        .map(|i| {
            if i < filled {
                r#"<span class="seg seg-on"></span>"#
            } else {
                r#"<span class="seg seg-off"></span>"#
            }
        })
        .collect();
    format!(r#"<span class="bar">{segments}</span>"#)
}

fn pill(label: &str, value: &str) -> String {
    format!(
        r#"<span class="pill"><span class="k">{}</span> <b>{}</b></span>"#,
        label,
        escape_html(value)
    )
}

fn section_title(ar: &str, en: &str) -> String {
    format!(r#"<div class="section-title">{ar} <span>{en}</span></div>"#)
}

fn section(ar: &str, en: &str, rows: &str) -> String {
    format!("      {}\n      <table>{}</table>", section_title(ar, en), rows)
}

fn info_row(ar: &str, en: &str, value: &str) -> String {
    format!(
        r#"<tr><td class="key">{ar}<br><span>{en}</span></td><td class="val">{}</td></tr>"#,
        escape_html(value)
    )
}

fn medical_row(fitness: MedicalFitness) -> String {
    let (class, label) = match fitness {
        MedicalFitness::Fit => ("fit", "✓ لائق طبياً / Medically Fit"),
        MedicalFitness::Unfit => ("unfit", "✗ غير لائق / Not Fit"),
        MedicalFitness::Pending => ("pending", "⏳ قيد الفحص / Pending"),
    };
    format!(
        r#"<tr><td class="key">اللياقة الطبية<br><span>Medical Fitness</span></td><td class="medical {class}">{label}</td></tr>"#
    )
}

/// Experience table: one row per entry, or a single placeholder row.
pub fn experience_table(entries: &[ExperienceEntry]) -> String {
    let header = "<tr><th>الدولة / Country</th><th>المدة / Period</th><th>المنصب / Position</th></tr>";
    if entries.is_empty() {
        return format!(
            r#"{header}<tr class="exp-empty"><td colspan="3">لا يوجد خبرة سابقة / No previous experience</td></tr>"#
        );
    }

    let rows: String = entries
        .iter()
        .map(|e| {
            format!(
                r#"<tr class="exp-row"><td>{}</td><td>{}</td><td>{}</td></tr>"#,
                escape_html(text(&e.country)),
                escape_html(&with_unit(text(&e.period), "سنة")),
                escape_html(text(&e.position)),
            )
        })
        .collect();
    format!("{header}{rows}")
}
