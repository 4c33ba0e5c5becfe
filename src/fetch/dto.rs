//! Wire shape of the listing service. Only the fields the directory reads are
//! decoded; everything else in the payload is ignored.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawUser {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub company: Option<RawCompany>,
    #[serde(default)]
    pub address: Option<RawAddress>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawCompany {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "catchPhrase")]
    pub catch_phrase: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawAddress {
    #[serde(default)]
    pub country: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_listing_with_nested_fields() {
        let body = r#"[{
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "phone": "1-770-736-8031 x56442",
            "address": { "street": "Kulas Light", "city": "Gwenborough" },
            "company": { "name": "Romaguera-Crona", "catchPhrase": "Multi-layered client-server neural-net" }
        }]"#;

        let users: Vec<RawUser> = serde_json::from_str(body).unwrap();
        assert_eq!(users.len(), 1);

        let user = &users[0];
        assert_eq!(user.id, 1);
        assert_eq!(user.email, "Sincere@april.biz");
        assert_eq!(user.address.as_ref().unwrap().country, None);
        let company = user.company.as_ref().unwrap();
        assert_eq!(company.name.as_deref(), Some("Romaguera-Crona"));
        assert_eq!(
            company.catch_phrase.as_deref(),
            Some("Multi-layered client-server neural-net")
        );
    }

    #[test]
    fn test_missing_optional_sections_decode_as_none() {
        let users: Vec<RawUser> = serde_json::from_str(r#"[{"id": 9, "name": "Solo"}]"#).unwrap();

        assert_eq!(users[0].company, None);
        assert_eq!(users[0].address, None);
        assert_eq!(users[0].email, "");
    }
}
