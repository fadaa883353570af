//! Сумма прописью: `1250.05` -> «одна тысяча двести пятьдесят рублей 5 копеек».

use crate::money::round_money;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

pub const ZERO: &str = "ноль";
pub const RUBLES: &str = "рублей";
pub const KOPECKS: &str = "копеек";

const ONES_MASC: [&str; 10] = [
    "", "один", "два", "три", "четыре", "пять", "шесть", "семь", "восемь", "девять",
];
const ONES_FEM: [&str; 10] = [
    "", "одна", "две", "три", "четыре", "пять", "шесть", "семь", "восемь", "девять",
];
const TEENS: [&str; 10] = [
    "десять",
    "одиннадцать",
    "двенадцать",
    "тринадцать",
    "четырнадцать",
    "пятнадцать",
    "шестнадцать",
    "семнадцать",
    "восемнадцать",
    "девятнадцать",
];
const TENS: [&str; 10] = [
    "", "", "двадцать", "тридцать", "сорок", "пятьдесят", "шестьдесят", "семьдесят",
    "восемьдесят", "девяносто",
];
const HUNDREDS: [&str; 10] = [
    "", "сто", "двести", "триста", "четыреста", "пятьсот", "шестьсот", "семьсот", "восемьсот",
    "девятьсот",
];

#[derive(Clone, Copy)]
enum Gender {
    Masculine,
    Feminine,
}

/// Разряд: род числительного и формы «одна / две-четыре / пять и больше».
struct Scale {
    gender: Gender,
    forms: [&'static str; 3],
}

// 10^3 ... 10^27; Decimal не превышает ~7.9 * 10^28
const SCALES: [Scale; 9] = [
    Scale { gender: Gender::Feminine, forms: ["тысяча", "тысячи", "тысяч"] },
    Scale { gender: Gender::Masculine, forms: ["миллион", "миллиона", "миллионов"] },
    Scale { gender: Gender::Masculine, forms: ["миллиард", "миллиарда", "миллиардов"] },
    Scale { gender: Gender::Masculine, forms: ["триллион", "триллиона", "триллионов"] },
    Scale { gender: Gender::Masculine, forms: ["квадриллион", "квадриллиона", "квадриллионов"] },
    Scale { gender: Gender::Masculine, forms: ["квинтиллион", "квинтиллиона", "квинтиллионов"] },
    Scale { gender: Gender::Masculine, forms: ["секстиллион", "секстиллиона", "секстиллионов"] },
    Scale { gender: Gender::Masculine, forms: ["септиллион", "септиллиона", "септиллионов"] },
    Scale { gender: Gender::Masculine, forms: ["октиллион", "октиллиона", "октиллионов"] },
];

/// Форма существительного после числа `n`:
/// 0 — «одна тысяча», 1 — «две/три/четыре тысячи», 2 — «пять тысяч».
/// 11–19 всегда дают третью форму.
pub fn plural_form(n: u128) -> usize {
    let last_two = n % 100;
    let last = n % 10;
    if (11..=19).contains(&last_two) {
        2
    } else if last == 1 {
        0
    } else if (2..=4).contains(&last) {
        1
    } else {
        2
    }
}

/// Сумма прописью с валютой. Ноль — просто «ноль», без валюты.
pub fn amount_in_words(amount: Decimal) -> String {
    let amount = round_money(amount.max(Decimal::ZERO));
    if amount.is_zero() {
        return ZERO.to_string();
    }

    let whole = amount.trunc();
    let kopecks = ((amount - whole) * Decimal::ONE_HUNDRED)
        .round()
        .to_u32()
        .unwrap_or(0);
    let rubles = whole.to_u128().unwrap_or(0);

    let mut words: Vec<&str> = Vec::new();
    if rubles == 0 {
        words.push(ZERO);
    } else {
        integer_words(rubles, &mut words);
    }
    words.push(RUBLES);

    let mut out = words.join(" ");
    if kopecks > 0 {
        out.push_str(&format!(" {kopecks} {KOPECKS}"));
    }
    out
}

/// Целое число прописью (мужской род для единиц), без валюты.
pub fn integer_words(n: u128, out: &mut Vec<&'static str>) {
    let mut triads = Vec::new();
    let mut rest = n;
    while rest > 0 {
        triads.push((rest % 1000) as u16);
        rest /= 1000;
    }

    for (idx, &triad) in triads.iter().enumerate().rev() {
        if triad == 0 {
            continue;
        }
        if idx == 0 {
            triad_words(triad, Gender::Masculine, out);
        } else {
            let scale = &SCALES[idx - 1];
            triad_words(triad, scale.gender, out);
            out.push(scale.forms[plural_form(triad as u128)]);
        }
    }
}

fn triad_words(n: u16, gender: Gender, out: &mut Vec<&'static str>) {
    let h = (n / 100) as usize;
    let t = ((n % 100) / 10) as usize;
    let o = (n % 10) as usize;

    if h > 0 {
        out.push(HUNDREDS[h]);
    }
    if t == 1 {
        out.push(TEENS[o]);
        return;
    }
    if t > 0 {
        out.push(TENS[t]);
    }
    if o > 0 {
        out.push(match gender {
            Gender::Masculine => ONES_MASC[o],
            Gender::Feminine => ONES_FEM[o],
        });
    }
}
