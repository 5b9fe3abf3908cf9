/// Formal e-mail instructions sent as the last text part of every request.
///
/// Placeholders: `{{reference}}` (empty, or [`FILE_REFERENCE`] when a file is
/// attached) and `{{content}}` (the user's brief, or [`FILE_ONLY_FALLBACK`]).
pub const EMAIL_TEMPLATE: &str = include_str!("../data/prompts/email.txt");

/// Appended to the "via Resumo de Texto" phrase when a file part is present.
pub const FILE_REFERENCE: &str = "e do arquivo anexo.";

/// Text to analyze when the caller sent a file but no brief.
pub const FILE_ONLY_FALLBACK: &str =
    "As informações devem ser estritamente extraídas do arquivo anexado.";

/// Replace `{{key}}` placeholders in a template string.
///
/// Variables are applied in order and later keys see earlier substitutions,
/// so user-supplied values belong at the end of `vars`.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut result = template.to_string();
    for (key, value) in vars {
        result = result.replace(&format!("{{{{{}}}}}", key), value);
    }
    result
}

/// Render [`EMAIL_TEMPLATE`] with its two interpolation points.
pub fn email_prompt(reference: &str, content: &str) -> String {
    render(
        EMAIL_TEMPLATE,
        &[("reference", reference), ("content", content)],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_single_var() {
        assert_eq!(
            render("Hello {{name}}!", &[("name", "world")]),
            "Hello world!"
        );
    }

    #[test]
    fn test_render_multiple_vars() {
        assert_eq!(
            render("{{a}} and {{b}}", &[("a", "cats"), ("b", "dogs")]),
            "cats and dogs"
        );
    }

    #[test]
    fn test_email_template_has_placeholders() {
        assert!(EMAIL_TEMPLATE.contains("{{reference}}"));
        assert!(EMAIL_TEMPLATE.contains("{{content}}"));
    }

    #[test]
    fn test_email_template_keeps_fixed_steps() {
        assert!(EMAIL_TEMPLATE.contains("1ª ETAPA - ASSUNTO"));
        assert!(EMAIL_TEMPLATE.contains("Prezados(as) Senhores(as) Diretores(as),"));
        assert!(EMAIL_TEMPLATE.contains("Vimos por meio desta"));
        assert!(EMAIL_TEMPLATE.contains("Atenciosamente,"));
        assert!(EMAIL_TEMPLATE.contains("Célula de Formação, Programas e Projetos - CEFOP"));
    }

    #[test]
    fn test_email_prompt_appends_content_last() {
        let prompt = email_prompt("", "Reunião amanhã às 9h");
        assert!(prompt.trim_end().ends_with("Reunião amanhã às 9h"));
        assert!(prompt.contains("(via Resumo de Texto )"));
        assert!(!prompt.contains("{{"));
    }

    #[test]
    fn test_email_prompt_does_not_expand_placeholders_in_content() {
        let prompt = email_prompt(FILE_REFERENCE, "literal {{reference}}");
        assert!(prompt.contains("(via Resumo de Texto e do arquivo anexo.)"));
        assert!(prompt.trim_end().ends_with("literal {{reference}}"));
    }
}
