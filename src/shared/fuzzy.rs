use std::cmp;

/// Lowercases a stop or group name and folds the Polish diacritics that show
/// up in ZTM exports, so that "żerań" and "Zeran" land on the same needle.
pub fn normalize(name: &str) -> String {
    name.chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'ą' => 'a',
            'ć' => 'c',
            'ę' => 'e',
            'ł' => 'l',
            'ń' => 'n',
            'ó' => 'o',
            'ś' => 's',
            'ź' | 'ż' => 'z',
            c => c,
        })
        .collect()
}

pub fn distance(s1: &str, s2: &str) -> usize {
    if s1 == s2 {
        return 0;
    }
    let s2_chars: Vec<char> = s2.chars().collect();
    if s1.is_empty() {
        return s2_chars.len();
    }
    if s2_chars.is_empty() {
        return s1.chars().count();
    }

    let mut prev: Vec<usize> = (0..=s2_chars.len()).collect();
    let mut curr = vec![0usize; s2_chars.len() + 1];
    for (i, c1) in s1.chars().enumerate() {
        curr[0] = i + 1;
        for (j, c2) in s2_chars.iter().enumerate() {
            let sub = if c1 == *c2 { prev[j] } else { prev[j] + 1 };
            curr[j + 1] = cmp::min(sub, cmp::min(prev[j + 1] + 1, curr[j] + 1));
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[s2_chars.len()]
}

pub fn score(needle: &str, hay: &str) -> f64 {
    let needle_tokens: Vec<_> = needle.split_whitespace().collect();
    let hay_tokens: Vec<_> = hay.split_whitespace().collect();
    let tokens = needle_tokens.len();
    let runs = cmp::min(needle_tokens.len(), hay_tokens.len());
    let mut score: f64 = 0.0;
    for i in 0..runs {
        score += score_inner(needle_tokens[i], hay_tokens[i]);
    }

    if score == 0.0 { 0.0 } else { score / tokens as f64 }
}

fn score_inner(s1: &str, s2: &str) -> f64 {
    let dist = distance(s1, s2);
    if dist == 0 {
        1.0
    } else {
        1.0 - (dist as f64 / cmp::max(s1.chars().count(), s2.chars().count()) as f64)
    }
}

#[test]
fn distance_symmetric() {
    assert_eq!(distance("wiatraczna", "wiatr"), distance("wiatr", "wiatraczna"));
}

#[test]
fn normalize_folds_diacritics() {
    assert_eq!(normalize("Świętokrzyska"), "swietokrzyska");
    assert_eq!(normalize("ŻERAŃ FSO"), "zeran fso");
}
