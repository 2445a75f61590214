use once_cell::sync::Lazy;

use crate::models::domain::{likert::LIKERT_POINTS, AxisDefinition};

pub const LIKERT_LABELS: [&str; LIKERT_POINTS] = [
    "1: Zdecydowanie się nie zgadzam",
    "2: Nie zgadzam się",
    "3: Nie mam zdania",
    "4: Zgadzam się",
    "5: Zdecydowanie się zgadzam",
];

/// Reference axis list: five axes, 60 questions in total.
pub static AXES: Lazy<Vec<AxisDefinition>> = Lazy::new(|| {
    vec![
        AxisDefinition::new(
            "Polityka Gospodarcza",
            "Równość Społeczna",
            "Wolność Rynkowa",
            &[
                "Progresja podatkowa i obciążenia fiskalne firm",
                "Wysokość i dostępność świadczeń socjalnych",
                "Regulacje rynku pracy (płaca minimalna, związki zawodowe)",
                "Rola państwa we własności kluczowych sektorów (energia, bankowość)",
                "Wolny handel międzynarodowy vs ochrona rynku wewnętrznego",
                "Akceptacja długu publicznego dla finansowania inwestycji/programów",
            ],
            8,
        ),
        AxisDefinition::new(
            "Polityka Społeczna",
            "Konserwatyzm",
            "Liberalizm",
            &[
                "Prawa osób LGBTQ+ (małżeństwa, adopcja)",
                "Dostępność i refundacja aborcji/antykoncepcji",
                "Rozdział kościoła od państwa i wpływ religii na prawo",
                "Model rodziny i edukacja seksualna w szkołach",
                "Granice wolności słowa (mowa nienawiści, bluźnierstwo)",
                "Polityka narkotykowa (legalizacja, dekryminalizacja)",
            ],
            8,
        ),
        AxisDefinition::new(
            "Polityka Narodowa",
            "Nacjonalizm",
            "Globalizm",
            &[
                "Głębokość integracji z Unią Europejską (suwerenność vs współpraca)",
                "Otwartość na imigrację zarobkową i polityka azylowa",
                "Rola państwa w ochronie kultury i języka narodowego",
                "Nacjonalizm gospodarczy (preferowanie krajowych firm/produktów)",
                "Stosunek do międzynarodowych trybunałów i prawa",
            ],
            7,
        ),
        AxisDefinition::new(
            "Polityka Środowiskowa",
            "Rozwój",
            "Ekologizm",
            &[
                "Rygorystyczność norm środowiskowych dla przemysłu",
                "Tempo i koszt transformacji energetycznej (odejście od węgla)",
                "Ochrona obszarów naturalnych (parki narodowe, wycinka drzew)",
                "Indywidualna odpowiedzialność vs systemowe rozwiązania w ekologii",
            ],
            4,
        ),
        AxisDefinition::new(
            "Władza i Porządek",
            "Wolność",
            "Bezpieczeństwo",
            &[
                "Zakres uprawnień policji i służb (kontrole, użycie siły)",
                "Stopień inwigilacji cyfrowej (monitoring internetu, dane)",
                "Surowość karania przestępstw (system więziennictwa)",
                "Prawo do posiadania broni",
                "Balans między wolnością zgromadzeń a porządkiem publicznym",
            ],
            7,
        ),
    ]
});
