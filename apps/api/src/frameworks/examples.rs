//! Example presets, one per (framework, locale) pair.

use crate::frameworks::{FieldValues, Framework};
use crate::i18n::Locale;

type Preset = &'static [(&'static str, &'static str)];

fn preset(framework: Framework, locale: Locale) -> Preset {
    match (framework, locale) {
        (Framework::Icdf, Locale::En) => &[
            ("Instruction", "Summarize"),
            ("Context", "Monthly report for the marketing director"),
            ("Data", "Q3 sales figures: Revenue $120,000; Units sold 8,200; Top region: EMEA."),
            ("Format", "Bullet points; Formal tone; Max 200 words; Include concluding recommendation."),
        ],
        (Framework::Icdf, Locale::Ar) => &[
            ("Instruction", "لخص"),
            ("Context", "تقرير شهري لمدير التسويق"),
            ("Data", "أرقام المبيعات للربع الثالث: الإيرادات 120,000$؛ الوحدات المباعة 8,200؛ المنطقة الأعلى: EMEA."),
            ("Format", "نقاط؛ نبرة رسمية؛ حد أقصى 200 كلمة؛ تضمين توصية ختامية."),
        ],
        (Framework::Icdf, Locale::Eg) => &[
            ("Instruction", "لخّص اللي حصل"),
            ("Context", "تقرير شهري لمدير التسويق"),
            ("Data", "أرقام مبيعات الربع التالت: الإيراد 120,000$؛ الوحدات 8,200؛ أحسن منطقة: EMEA."),
            ("Format", "نقاط؛ نغمة رسمية؛ مش أكتر من 200 كلمة؛ وحط توصية ختامية."),
        ],
        (Framework::RcrEoc, Locale::En) => &[
            ("Role", "Senior Project Manager"),
            ("Context", "Fast-paced agile development team"),
            ("Request", "Review weekly performance report and identify recurring issues"),
            ("Examples", "(Input) Sprint burndown shows frequent scope creep; (Output) One-paragraph analysis and 3 prioritized recommendations."),
            ("Output", "Three-column table: Problem; Proposed Solution; Recommendation"),
            ("Constraints", "Keep responses under three sentences"),
        ],
        (Framework::RcrEoc, Locale::Ar) => &[
            ("Role", "مدير مشروع أول"),
            ("Context", "فريق تطوير سريع التطور"),
            ("Request", "راجع تقرير الأداء الأسبوعي وحدد المشاكل المتكررة"),
            ("Examples", "(المدخل) مخطط الحروق يُظهر زحف نطاق متكرر؛ (المخرج) تحليل فقرة واحدة و 3 توصيات مرتبة حسب الأولوية."),
            ("Output", "جدول ثلاثي الأعمدة: المشكلة؛ الحل المقترح؛ التوصية"),
            ("Constraints", "اجعل الاستجابات أقل من ثلاث جمل"),
        ],
        (Framework::RcrEoc, Locale::Eg) => &[
            ("Role", "مدير مشروع شاطر"),
            ("Context", "فريق تطوير سريع شوية"),
            ("Request", "شوف تقرير الأسبوع وقول لي فيه إيه مشاكل بتتكرر"),
            ("Examples", "(المدخل) البرن داون بيقول إن الفريق دايماً بيضيف حاجات زيادة؛ (المخرج) فقرة واحدة وتلات حلول بالترتيب."),
            ("Output", "جدول فيه تلاث أعمدة: المشكلة؛ الحل؛ التوصية"),
            ("Constraints", "مش أكتر من تلات جمل"),
        ],
        (Framework::Micro, Locale::En) => &[
            ("Message", "AI is a tool for smarter studying"),
            ("Intention", "Motivate students to try the product"),
            ("Context", "University students under academic pressure"),
            ("Rhythm", "Motivational, high energy, informal, quick"),
            ("Output", "5-minute YouTube script segmented Intro/Body/CTA"),
        ],
        (Framework::Micro, Locale::Ar) => &[
            ("Message", "الذكاء الاصطناعي أداة للدراسة الذكية"),
            ("Intention", "تحفيز الطلاب لتجربة المنتج"),
            ("Context", "طلاب الجامعة تحت الضغط الأكاديمي"),
            ("Rhythm", "تحفيزي، طاقة عالية، غير رسمي، سريع"),
            ("Output", "سيناريو يوتيوب لمدة 5 دقائق: المقدمة/المتن/نداء الإجراء"),
        ],
        (Framework::Micro, Locale::Eg) => &[
            ("Message", "الذكاء الاصطناعي أداة للمذاكرة الذكية"),
            ("Intention", "نشجع الطلاب يجربوا التطبيق"),
            ("Context", "طلاب جامعة فيهم ضغط دراسي كتير"),
            ("Rhythm", "حماسي، طاقة عالية، بسيط، سريع"),
            ("Output", "سيناريو يوتيوب 5 دقائق: مقدمة + الموضوع + نداء"),
        ],
        (Framework::Costar, Locale::En) => &[
            ("Context", "We are launching a new smart product line."),
            ("Offer", "25% off all cleaning products for 72 hours."),
            ("Style", "Simple, elegant, warm, like a personal recommendation from a friend."),
            ("Target", "Women aged 25-45 who dislike strenuous cleaning."),
            ("Action", "Click the link before the offer expires."),
            ("Result", "Maximize sales during the 3-day window"),
        ],
        (Framework::Costar, Locale::Ar) => &[
            ("Context", "نطلق خط منتجات ذكي جديد."),
            ("Offer", "خصم 25% على جميع منتجات التنظيف لمدة 72 ساعة."),
            ("Style", "بسيط، أنيق، دافئ، مثل توصية شخصية من صديق."),
            ("Target", "النساء اللواتي تتراوح أعمارهن بين 25-45 سنة ولا يحبذن التنظيف الشاق."),
            ("Action", "انقر على الرابط قبل انتهاء العرض."),
            ("Result", "تعظيم المبيعات خلال النافذة المدتها 3 أيام"),
        ],
        (Framework::Costar, Locale::Eg) => &[
            ("Context", "بنطلق خط منتجات ذكي جديد."),
            ("Offer", "25% خصم على كل منتجات التنظيف لمدة 72 ساعة بس."),
            ("Style", "بسيط، شيك، دافي، زي ما يقول لك صاحبك توصية."),
            ("Target", "البنات اللي عندهم بين 25 لـ 45 سنة وما يحبوا الكنس والتنظيف."),
            ("Action", "اضغط على الرابط وخد الخصم قبل ما ينتهي."),
            ("Result", "نزود المبيعات في التلات أيام دي"),
        ],
    }
}

/// Sample field values for a framework in a locale.
/// Every pair of the fixed grid carries a preset, so this never fails.
pub fn example_for(framework: Framework, locale: Locale) -> FieldValues {
    preset(framework, locale)
        .iter()
        .map(|(field, value)| (field.to_string(), value.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_pair_has_a_preset() {
        for framework in Framework::ALL {
            for locale in Locale::ALL {
                assert!(
                    !example_for(framework, locale).is_empty(),
                    "missing preset for {framework}/{locale}"
                );
            }
        }
    }

    #[test]
    fn test_presets_fill_every_declared_field() {
        for framework in Framework::ALL {
            for locale in Locale::ALL {
                let example = example_for(framework, locale);
                assert_eq!(example.len(), framework.fields().len());
                for field in example.keys() {
                    assert!(framework.has_field(field), "{framework}/{locale}: {field}");
                }
            }
        }
    }

    #[test]
    fn test_icdf_en_preset() {
        let example = example_for(Framework::Icdf, Locale::En);
        assert_eq!(example["Instruction"], "Summarize");
        assert_eq!(
            example["Context"],
            "Monthly report for the marketing director"
        );
    }

    #[test]
    fn test_presets_satisfy_required_fields() {
        for framework in Framework::ALL {
            let example = example_for(framework, Locale::Eg);
            for required in framework.required() {
                assert!(!example[*required].trim().is_empty());
            }
        }
    }
}
