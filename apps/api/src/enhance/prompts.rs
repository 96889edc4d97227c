// LLM prompt text for the enhancement service.
// Reuses the JSON-only fragment from llm_client::prompts.

use crate::frameworks::{FieldValues, Framework};
use crate::i18n::Locale;
use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;

const ENHANCE_SYSTEM_EN: &str = "You are an expert prompt engineer. Your job is to take raw, incomplete user inputs \
and transform them into professional, well-structured prompts ready for AI assistants.

When given user input, you should:
1. Identify which framework field each input belongs to
2. Fill in missing fields intelligently based on context
3. Expand vague inputs into specific, actionable instructions
4. Maintain the user's original intent while improving clarity
5. Return ONLY the enhanced field values as JSON (no explanations)

Format: Return a JSON object with framework field names as keys and enhanced values.";

const ENHANCE_SYSTEM_AR: &str = "أنت خبير متخصص في هندسة الأوامر. مهمتك تحويل المدخلات الخام والغير مكتملة من المستخدمين \
إلى أوامر احترافية منظمة وجاهزة لمساعدات الذكاء الاصطناعي.

عند إعطاؤك مدخلات المستخدم، يجب عليك:
1. تحديد أي حقل من حقول الإطار ينتمي إليه كل مدخل
2. ملء الحقول المفقودة بذكاء بناءً على السياق
3. توسيع المدخلات الغامضة إلى تعليمات محددة وقابلة للتنفيذ
4. الحفاظ على القصد الأصلي للمستخدم مع تحسين الوضوح
5. أرجع ONLY القيم المحسّنة كـ JSON (بدون شروحات)

الصيغة: أرجع كائن JSON به أسماء حقول الإطار كمفاتيح والقيم المحسّنة.";

const ENHANCE_SYSTEM_EG: &str = "أنت خبير في فن كتابة الأوامر. الشغلة اللي بتعملها إنك تاخد المدخلات الخام من المستخدم \
وتحولها لأوامر احترافية جاهزة للذكاء الاصطناعي.

عند ما تتعطى مدخلات المستخدم، لازم:
1. تشوف كل مدخل ده بتاع حقل إيه من حقول الإطار
2. تملي الحقول الناقصة بذكاء من السياق
3. تاخد المدخلات الغامضة وتكتبها بشكل واضح ومحدد
4. تحافظ على قصد المستخدم وتحسن الكلام
5. أرجع قيم محسّنة بس كـ JSON (بدون شروح)

الصيغة: أرجع كائن JSON به أسماء الحقول والقيم المحسّنة.";

/// System instruction for every enhancement call, in the user's locale.
pub fn system_prompt(locale: Locale) -> &'static str {
    match locale {
        Locale::En => ENHANCE_SYSTEM_EN,
        Locale::Ar => ENHANCE_SYSTEM_AR,
        Locale::Eg => ENHANCE_SYSTEM_EG,
    }
}

/// One `<field>: <value>` line per non-blank field, in framework order.
/// Empty when every field is blank.
pub fn draft_from_fields(framework: Framework, fields: &FieldValues) -> String {
    filled(framework, fields)
        .map(|(name, value)| format!("{name}: {value}"))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn enhance_message(framework: Framework, draft: &str) -> String {
    format!(
        "Framework: {name}\n\
         Framework fields: {fields}\n\
         Raw user input: {draft}\n\n\
         Please enhance this input by filling in all {name} framework fields \
         based on the user's intent. {JSON_ONLY_INSTRUCTION}",
        name = framework.name(),
        fields = framework.fields().join(", "),
    )
}

pub fn suggest_message(framework: Framework, fields: &FieldValues) -> String {
    let summary = filled(framework, fields)
        .map(|(name, value)| format!("- {name}: {value}"))
        .collect::<Vec<_>>()
        .join("\n");
    let empty = framework
        .fields()
        .iter()
        .filter(|name| fields.get(**name).map_or(true, |v| v.trim().is_empty()))
        .copied()
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Framework: {name}\n\
         Framework fields: {all}\n\
         Filled fields:\n{summary}\n\n\
         Suggest values for the empty fields ({empty}) to complete this {name} prompt. \
         {JSON_ONLY_INSTRUCTION}",
        name = framework.name(),
        all = framework.fields().join(", "),
    )
}

fn filled<'a>(
    framework: Framework,
    fields: &'a FieldValues,
) -> impl Iterator<Item = (&'static str, &'a str)> + 'a {
    framework.fields().iter().filter_map(move |name| {
        let value = fields.get(*name)?.trim();
        (!value.is_empty()).then_some((*name, value))
    })
}
