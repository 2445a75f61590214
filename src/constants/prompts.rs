// Prompt text is Polish: the quiz, its answer scale and its summaries are all
// presented in Polish. Placeholders in braces are substituted by the generators.

pub const QUESTION_PROMPT_HEADER: &str = "Dla osi politycznej '{axis_name}' ('{pole_left}' vs '{pole_right}'), wygeneruj łącznie {total} **RÓŻNORODNYCH i SPECYFICZNYCH** stwierdzeń.
Wszystkie stwierdzenia muszą spełniać następujące warunki:
1. Dotyczyć **konkretnych aspektów** ogólnych postaw i wartości, być prostymi, jednoznacznymi opiniami.
2. Być sformułowane tak, aby ZGODA (wynik 5: '{max_label}') oznaczała silne poparcie dla bieguna '{pole_right}', a NIEZGODA (wynik 1: '{min_label}') oznaczała silne poparcie dla bieguna '{pole_left}'.
3. Zmuszać do zajęcia stanowiska na 5-stopniowej skali Likerta.
4. **Unikać powtarzania tej samej myśli** w różnych sformułowaniach. Każde pytanie powinno wnosić **nowy niuans** lub dotyczyć **innego dylematu** w ramach osi.
5. Powinny badać **potencjalne konsekwencje lub trudniejsze aspekty** danego stanowiska, nie tylko proste deklaracje.";

pub const QUESTION_PROMPT_SUB_TOPICS: &str = "
Pierwsze {count} stwierdzeń musi dotyczyć następujących podtematów (po jednym na podtemat, eksplorując ich **specyfikę**):
{sub_topics}";

pub const QUESTION_PROMPT_REMAINING_GENERAL: &str = "
Pozostałe {count} stwierdzeń powinno dotyczyć osi '{axis_name}' bardziej ogólnie, eksplorując **RÓŻNE jej aspekty i dylematy** nieujęte w powyższych podtematach. **Zadbaj o różnorodność tych pytań.**";

pub const QUESTION_PROMPT_ONLY_GENERAL: &str = "
Wygeneruj {count} **RÓŻNORODNYCH** stwierdzeń dotyczących osi '{axis_name}' ogólnie, eksplorując różne jej aspekty i dylematy.";

pub const QUESTION_PROMPT_FOOTER: &str = "
Przykład formatowania ZGODY na prawy biegun (Wolność Rynkowa): \"Niskie podatki są ważniejsze dla gospodarki niż wysokie wydatki socjalne.\"

Zwróć **tylko listę {total} stwierdzeń**, każde w nowej linii. Bez numeracji, wstępów, nazw podtematów czy formatowania markdown.";

pub const SUMMARY_PROMPT: &str = r#"
Przeanalizuj **dogłębnie** poniższe odpowiedzi użytkownika (skala 1-5, 1=Zdecydowanie się nie zgadzam, 5=Zdecydowanie się zgadzam), szukając **najbardziej dominujących i spójnych wzorców myślenia, wartości oraz ewentualnych wewnętrznych napięć**.

Odpowiedzi:
{answers}

Twoim zadaniem jest napisanie **spersonalizowanego, płynnego podsumowania** (ok. 120-180 słów) w formie **JEDNEGO AKAPITU**, które trafnie opisuje profil polityczny użytkownika. Pisz bezpośrednio do użytkownika ('Ty', 'Twoje').

**Instrukcje:**
1.  **Rozpocznij BEZPOŚREDNIO** od zdania identyfikującego **główną myśl przewodnią lub kluczowy dylemat** widoczny w odpowiedziach (np. "Twoje odpowiedzi malują obraz osoby konsekwentnie stawiającej na wolność indywidualną..." lub "Charakteryzuje Cię poszukiwanie równowagi między pragmatyzmem gospodarczym a wrażliwością społeczną...").
2.  **Rozwiń tę główną myśl**, ilustrując ją **1-2 innymi znaczącymi tendencjami** zaobserwowanymi w odpowiedziach (np. "...co przejawia się zarówno w Twoim podejściu do kwestii obyczajowych, jak i w sceptycyzmie wobec nadmiernych regulacji."). **NIE WYMIENIAJ KONKRETNYCH ODPOWIEDZI ANI OSI.** Skup się na syntezie ogólnych postaw.
3.  Wpleć subtelne wskazanie na **1-2 nurty ideologiczne**, z którymi zaobserwowane wzorce mogą **rezonować**, używając sformułowań typu: "...takie podejście często spotyka się w ramach [nazwa nurtu]." lub "...co może sytuować Twoje poglądy blisko [nazwa nurtu]." **Unikaj definitywnego etykietowania.**
4.  **Zadbaj o naturalny, angażujący język.** Unikaj formalnego, raportowego tonu.
5.  **ABSOLUTNIE NIE używaj żadnych zdań wstępnych** typu "Oto podsumowanie..." ani nie opisuj struktury odpowiedzi.

**Przykład początku:** "Twoje odpowiedzi sugerują, że wolność jednostki jest dla Ciebie kluczową wartością, co widać w liberalnym podejściu do spraw społecznych i niechęci do ograniczeń gospodarczych. Jednocześnie dostrzegasz rolę państwa w zapewnieniu podstawowego bezpieczeństwa..."

Zwróć **TYLKO gotowy tekst podsumowania** jako jeden akapit.
"#;

pub const SUMMARY_FALLBACK_MESSAGE: &str =
    "Nie udało się wygenerować poprawnego podsumowania. Spróbuj ponownie.";

pub const SUMMARY_ERROR_PREFIX: &str = "Wystąpił błąd podczas generowania podsumowania";

/// Openers the model is told not to use; matched case-insensitively.
pub const SUMMARY_PREAMBLES: [&str; 2] = ["oto podsumowanie", "analiza twoich"];
