// Translation tables. The Egyptian tables only list entries that differ from Arabic.

use super::Locale;

pub type Table = &'static [(&'static str, &'static str)];

const EN_LABELS: Table = &[
    ("Instruction", "Instruction"),
    ("Context", "Context"),
    ("Data", "Data"),
    ("Format", "Format"),
    ("Role", "Role"),
    ("Request", "Request"),
    ("Examples", "Examples"),
    ("Output", "Output"),
    ("Constraints", "Constraints"),
    ("Message", "Message"),
    ("Intention", "Intention"),
    ("Rhythm", "Rhythm"),
    ("Offer", "Offer"),
    ("Style", "Style"),
    ("Target", "Target"),
    ("Action", "Action"),
    ("Result", "Result"),
];

const AR_LABELS: Table = &[
    ("Instruction", "التعليمات"),
    ("Context", "السياق"),
    ("Data", "البيانات"),
    ("Format", "التنسيق"),
    ("Role", "الدور"),
    ("Request", "الطلب"),
    ("Examples", "أمثلة"),
    ("Output", "الإخراج"),
    ("Constraints", "القيود"),
    ("Message", "الرسالة"),
    ("Intention", "النية"),
    ("Rhythm", "الإيقاع"),
    ("Offer", "العرض"),
    ("Style", "النغمة"),
    ("Target", "الهدف"),
    ("Action", "الإجراء"),
    ("Result", "النتيجة"),
];

const EG_LABELS: Table = &[("Style", "الطابع"), ("Target", "الزباين")];

const EN_HELP: Table = &[
    ("Instruction", "The action. Define the primary task (e.g., 'Summarize', 'Analyze', 'Draft')."),
    ("Context", "The Situation/Purpose. Explain why the task is being done and who the audience is."),
    ("Data", "The Input. Provide the raw data or detailed information the AI needs to process."),
    ("Format", "The Output Style. Specify the desired structure and tone."),
    ("Role", "The Persona. Assign the AI a clear professional identity."),
    ("Request", "The Specific Job. State the precise deliverable."),
    ("Examples", "Few-shot example input and desired output to set expectations."),
    ("Output", "The Structure. Define the exact structure of the response."),
    ("Constraints", "The Limitations. Set boundaries the AI must follow."),
    ("Message", "The Core Idea. What is the single, central theme or takeaway you want to convey?"),
    ("Intention", "The Goal. What action or feeling should the audience have after consuming the content?"),
    ("Rhythm", "Tone and Pace. Define the style, mood, and speed."),
    ("Offer", "The Value Proposition. The deal, discount, or benefit."),
    ("Style", "The Voice. The brand personality."),
    ("Target", "The Audience Profile. Define the ideal customer."),
    ("Action", "Call to Action (CTA). What must the user click or do?"),
    ("Result", "The Business Goal. What outcome do we want from this marketing piece?"),
];

const AR_HELP: Table = &[
    ("Instruction", "الإجراء. عرّف المهمة الأساسية (مثل: لخص، حلل، اكتب)."),
    ("Context", "الوضع/الهدف. اشرح سبب تنفيذ المهمة ومن هو الجمهور."),
    ("Data", "المدخلات. قدّم البيانات أو المعلومات التي يحتاجها الذكاء الاصطناعي لمعالجتها."),
    ("Format", "نمط الإخراج. حدد البنية والنبرة المطلوبة."),
    ("Role", "الشخصية. عيّن هوية مهنية للذكاء الاصطناعي."),
    ("Request", "المهمة المحددة. ضع المخرجات المطلوبة بدقة."),
    ("Examples", "مثال مدخل ومثال المخرجات المرغوبة لضبط التوقّعات."),
    ("Output", "البنية. حدّد البنية الدقيقة للاستجابة."),
    ("Constraints", "الحدود. ضع القواعد التي يجب أن يتبعها الذكاء الاصطناعي."),
    ("Message", "الفكرة الأساسية. الفكرة أو الاستنتاج الذي تريد نقله."),
    ("Intention", "الهدف. ما الإجراء أو الشعور المطلوب لدى الجمهور؟"),
    ("Rhythm", "النغمة والسرعة. حدد الأسلوب والمزاج والوتيرة."),
    ("Offer", "القيمة المقدمة. الخصم أو الفائدة."),
    ("Style", "صوت العلامة التجارية."),
    ("Target", "ملف الجمهور المستهدف."),
    ("Action", "نداء لاتخاذ إجراء. ما الذي يجب أن يفعله المستخدم؟"),
    ("Result", "هدف العمل. النتيجة المرغوبة."),
];

const EG_HELP: Table = &[
    ("Instruction", "اعمل إيه بالظبط. اكتب المهمة الأساسية (مثال: لخّص، حلّل، اكتب)."),
    ("Context", "ليه بنعمل ده ومين اللي هيقراه؟"),
    ("Data", "المدخلات. حط البيانات أو النص اللي عايز النظام يشتغل عليه."),
    ("Format", "شكل الخرج. نقاط ولا فقرة؟ نغمة رسمية ولا خفيفة؟"),
    ("Role", "هيتصرف كأنه مين؟ (مثال: مدير مشروع كبير)."),
    ("Request", "المطلوب بالظبط. اكتب المهمة بوضوح."),
    ("Examples", "هات مثال للمدخل والمُخرَج المرغوب علشان النظام يفهم."),
    ("Output", "شكل الرد اللي عايزه."),
    ("Constraints", "حط حدود أو حاجات ممنوعة."),
    ("Message", "الفكرة اللي عايز توصلها."),
    ("Intention", "عايز الناس تعمل إيه أو تحس بإيه بعد ما يقروها؟"),
    ("Rhythm", "نبرة وسرعة الكلام. عايزها حماسية ولا هادية؟"),
    ("Offer", "العرض أو الخصم أو الميزة اللي عندك."),
    ("Style", "شخصية الماركة: بسيطة، أنيقة، ولا مرحة؟"),
    ("Target", "مين الجمهور المستهدف؟"),
    ("Action", "عايزهم يعملوا إيه؟ اضغطوا، اشتركوا، ولا اتصلوا؟"),
    ("Result", "النتيجة اللي بتدور عليها."),
];

const EN_MESSAGES: Table = &[
    ("required_error", "Please fill required fields or enable \"Allow blanks\"."),
    ("ai_empty_input", "Please fill in at least one field first"),
    ("ai_success", "Prompt enhanced successfully!"),
    ("ai_failed", "AI enhancement unavailable. Using your input as-is."),
];

const AR_MESSAGES: Table = &[
    ("required_error", "يرجى تعبئة الحقول المطلوبة أو تفعيل \"السماح بالفراغات\"."),
    ("ai_empty_input", "يرجى تعبئة حقل واحد على الأقل أولاً"),
    ("ai_success", "تم تحسين العبارة بنجاح!"),
    ("ai_failed", "تحسين الذكاء الاصطناعي غير متاح. استخدام إدخالك كما هو."),
];

const EG_MESSAGES: Table = &[
    ("required_error", "كمّل الحقول المطلوبة ولا فعل \"خلي الحقول فاضية\"."),
    ("ai_empty_input", "ملّي حقل واحد على الأقل بالأول"),
    ("ai_success", "تمام! الذكاء الاصطناعي حسّن البرومبت!"),
    ("ai_failed", "الذكاء الاصطناعي مش متاح دلوقتي. بس خليك في البرومبت بتاعك."),
];

pub fn field_labels(locale: Locale) -> Table {
    match locale {
        Locale::En => EN_LABELS,
        Locale::Ar => AR_LABELS,
        Locale::Eg => EG_LABELS,
    }
}

pub fn field_help(locale: Locale) -> Table {
    match locale {
        Locale::En => EN_HELP,
        Locale::Ar => AR_HELP,
        Locale::Eg => EG_HELP,
    }
}

pub fn messages(locale: Locale) -> Table {
    match locale {
        Locale::En => EN_MESSAGES,
        Locale::Ar => AR_MESSAGES,
        Locale::Eg => EG_MESSAGES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_tables_cover_the_same_keys() {
        for table in [field_labels, field_help, messages] {
            let en: Vec<_> = table(Locale::En).iter().map(|(k, _)| *k).collect();
            let ar: Vec<_> = table(Locale::Ar).iter().map(|(k, _)| *k).collect();
            assert_eq!(en, ar);
        }
    }

    #[test]
    fn test_egyptian_keys_exist_in_arabic() {
        for table in [field_labels, field_help, messages] {
            for (key, _) in table(Locale::Eg) {
                assert!(
                    table(Locale::Ar).iter().any(|(k, _)| k == key),
                    "eg override '{key}' has no ar base entry"
                );
            }
        }
    }
}
