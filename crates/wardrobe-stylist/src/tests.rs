//! Integration tests for the Stylist

#[cfg(test)]
mod tests {
    use crate::{Stylist, StylistConfig, StylistError, MAX_ATTEMPTS};
    use std::sync::Arc;
    use wardrobe_domain::{
        ClosetItem, ClothingCategory, Formality, GenerateOutfitsRequest, ImageMime, ImagePayload,
        Season,
    };
    use wardrobe_llm::{LlmError, ModelResponse, ScriptedClient};

    const ANALYSIS_JSON: &str = r#"{
        "summary": "Found 2 items",
        "items": [
            {"id": "a", "name": "Navy Blazer", "category": "outerwear", "color": "navy",
             "formality": "formal", "seasonality": ["fall", "winter"]},
            {"id": "b", "name": "Grey Trousers", "category": "bottom", "color": "gray",
             "formality": "smart-casual", "seasonality": ["fall"], "fit": "slim"}
        ],
        "warnings": ["Lighting was poor"]
    }"#;

    const OUTFITS_JSON: &str = r#"{
        "outfits": [
            {"outfit_id": "o1", "title": "Office", "reasoning": "Sharp", "confidence": 0.9,
             "pieces": [
                {"item_id": "a", "item_name": "Navy Blazer", "category": "outerwear",
                 "styling_note": "Buttoned"},
                {"item_id": "b", "item_name": "Grey Trousers", "category": "bottom",
                 "styling_note": "Cuffed"}
             ]},
            {"outfit_id": "o2", "title": "After hours", "reasoning": "Relaxed", "confidence": 0.7,
             "pieces": [
                {"item_id": "b", "item_name": "Grey Trousers", "category": "bottom",
                 "styling_note": ""},
                {"item_id": "a", "item_name": "Navy Blazer", "category": "outerwear",
                 "styling_note": "Open"}
             ],
             "alternatives": ["Swap the blazer for a cardigan"]}
        ],
        "global_tips": ["Press the trousers"]
    }"#;

    fn live(client: &ScriptedClient) -> Stylist {
        Stylist::with_client(Arc::new(client.clone()))
    }

    fn image() -> ImagePayload {
        ImagePayload::new("rack.png", ImageMime::Png, vec![0x89, 0x50, 0x4e, 0x47])
    }

    fn item(id: &str, name: &str, category: ClothingCategory) -> ClosetItem {
        ClosetItem {
            id: id.to_string(),
            name: name.to_string(),
            category,
            color: "navy".to_string(),
            material: None,
            pattern: None,
            formality: Formality::SmartCasual,
            seasonality: vec![Season::Fall],
            tags: Vec::new(),
            notes: None,
        }
    }

    fn request() -> GenerateOutfitsRequest {
        GenerateOutfitsRequest {
            closet_items: vec![
                item("a", "Navy Blazer", ClothingCategory::Outerwear),
                item("b", "Grey Trousers", ClothingCategory::Bottom),
            ],
            occasion: "Client meeting".to_string(),
            itinerary: "Office, then dinner".to_string(),
            preferences: Some("No ties".to_string()),
        }
    }

    #[tokio::test]
    async fn test_live_analysis() {
        let client = ScriptedClient::new(ANALYSIS_JSON);
        let result = live(&client)
            .analyze_closet(Some("navy blazer"), &[image()])
            .await
            .unwrap();

        assert_eq!(result.items.len(), 2);
        assert_eq!(result.items[1].category, ClothingCategory::Bottom);
        assert_eq!(result.warnings, vec!["Lighting was poor"]);
        assert_eq!(client.call_count(), 1);
    }

    #[tokio::test]
    async fn test_format_error_then_success_retries_once() {
        let client = ScriptedClient::new(ANALYSIS_JSON);
        client.push_text("{\"summary\": \"truncated\"");

        let result = live(&client).analyze_closet(Some("navy blazer"), &[]).await;

        assert_eq!(result.unwrap().summary, "Found 2 items");
        assert_eq!(client.call_count(), 2);
    }

    #[tokio::test]
    async fn test_two_format_errors_are_terminal() {
        let client = ScriptedClient::new("not json at all");

        let result = live(&client).generate_outfits(&request()).await;

        match result {
            Err(StylistError::ResponseFormat { attempts, source }) => {
                assert_eq!(attempts, MAX_ATTEMPTS);
                assert!(source.is_format());
            }
            other => panic!("expected terminal format error, got {:?}", other),
        }
        assert_eq!(client.call_count(), 2);
    }

    #[tokio::test]
    async fn test_invariant_failure_counts_as_format_error() {
        // One outfit only: parses, but fails validation
        let one_outfit = r#"{"outfits": [{"outfit_id": "o1", "title": "T", "reasoning": "R",
            "confidence": 0.5, "pieces": [
                {"item_id": "a", "item_name": "A", "category": "top", "styling_note": ""},
                {"item_id": "b", "item_name": "B", "category": "bottom", "styling_note": ""}
            ]}]}"#;
        let client = ScriptedClient::new(OUTFITS_JSON);
        client.push_text(one_outfit);

        let result = live(&client).generate_outfits(&request()).await.unwrap();
        assert_eq!(result.outfits.len(), 2);
        assert_eq!(client.call_count(), 2);
    }

    #[tokio::test]
    async fn test_service_error_is_not_retried() {
        let client = ScriptedClient::new(OUTFITS_JSON);
        client.push_error(LlmError::Communication("connection reset".to_string()));

        let result = live(&client).generate_outfits(&request()).await;

        assert!(matches!(result, Err(StylistError::Service(_))));
        assert_eq!(client.call_count(), 1);
    }

    #[tokio::test]
    async fn test_empty_body_is_not_retried() {
        let client = ScriptedClient::new(ANALYSIS_JSON);
        client.push_response(ModelResponse::empty());

        let result = live(&client).analyze_closet(Some("tee"), &[]).await;

        assert!(matches!(result, Err(StylistError::Service(_))));
        assert_eq!(client.call_count(), 1);
    }

    #[tokio::test]
    async fn test_fenced_reply_accepted() {
        let client = ScriptedClient::new(format!("```json\n{}\n```", OUTFITS_JSON));
        let result = live(&client).generate_outfits(&request()).await.unwrap();
        assert_eq!(result.global_tips, vec!["Press the trousers"]);
    }

    #[tokio::test]
    async fn test_candidate_text_used_when_primary_missing() {
        let response = ModelResponse::from_candidate_text(ANALYSIS_JSON);
        let client = ScriptedClient::with_default(response);
        let result = live(&client).analyze_closet(None, &[image()]).await.unwrap();
        assert_eq!(result.items.len(), 2);
    }

    #[tokio::test]
    async fn test_images_forwarded_only_for_analysis() {
        let client = ScriptedClient::new(ANALYSIS_JSON);
        let stylist = live(&client);
        stylist
            .analyze_closet(Some("blazer"), &[image(), image()])
            .await
            .unwrap();

        client.push_text(OUTFITS_JSON);
        stylist.generate_outfits(&request()).await.unwrap();

        let calls = client.invocations();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].image_count, 2);
        assert!(calls[0].prompt.starts_with("You are a wardrobe parser."));
        assert_eq!(calls[1].image_count, 0);
        assert!(calls[1].prompt.contains("preferences: No ties"));
        assert!(calls.iter().all(|c| c.has_schema));
    }

    #[tokio::test]
    async fn test_retry_sends_identical_prompt() {
        let client = ScriptedClient::new(OUTFITS_JSON);
        client.push_text("[]");
        live(&client).generate_outfits(&request()).await.unwrap();

        let calls = client.invocations();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], calls[1]);
    }

    #[tokio::test]
    async fn test_analysis_requires_input() {
        let client = ScriptedClient::new(ANALYSIS_JSON);
        let result = live(&client).analyze_closet(Some("   "), &[]).await;

        assert!(matches!(result, Err(StylistError::InvalidRequest(_))));
        assert_eq!(client.call_count(), 0);

        let mock = Stylist::mock().analyze_closet(None, &[]).await;
        assert!(matches!(mock, Err(StylistError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_invalid_outfit_request_rejected_before_call() {
        let client = ScriptedClient::new(OUTFITS_JSON);
        let mut req = request();
        req.closet_items.clear();

        let result = live(&client).generate_outfits(&req).await;

        assert!(matches!(result, Err(StylistError::InvalidRequest(_))));
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn test_mock_end_to_end() {
        let stylist = Stylist::from_config(&StylistConfig::mock()).unwrap();
        assert!(stylist.is_mock());

        let analysis = stylist
            .analyze_closet(Some("white tee, blue jeans, brown loafers"), &[])
            .await
            .unwrap();
        let categories: Vec<_> = analysis.items.iter().map(|i| i.category).collect();
        assert_eq!(
            categories,
            vec![ClothingCategory::Top, ClothingCategory::Bottom, ClothingCategory::Shoes]
        );
        assert!(analysis.warnings.is_empty());

        let outfits = stylist
            .generate_outfits(&GenerateOutfitsRequest {
                closet_items: analysis.items,
                occasion: "Day trip".to_string(),
                itinerary: "Walk, lunch, museum".to_string(),
                preferences: None,
            })
            .await
            .unwrap();
        let confidences: Vec<f64> = outfits.outfits.iter().map(|o| o.confidence).collect();
        assert_eq!(confidences, vec![0.86, 0.82, 0.79]);
        assert_eq!(outfits.global_tips.len(), 2);
    }

    #[tokio::test]
    async fn test_mock_warning_matrix() {
        let stylist = Stylist::mock();

        let both = stylist.analyze_closet(Some("red dress"), &[image()]).await.unwrap();
        assert_eq!(both.warnings.len(), 1);
        assert!(both.warnings[0].starts_with("Combined image and manual inputs"));

        let images_only = stylist.analyze_closet(None, &[image()]).await.unwrap();
        assert_eq!(images_only.warnings.len(), 1);
        assert!(images_only.warnings[0].starts_with("Image-only analysis"));

        let text_only = stylist.analyze_closet(Some("red dress"), &[]).await.unwrap();
        assert!(text_only.warnings.is_empty());
    }

    #[test]
    fn test_live_mode_requires_key() {
        let mut config = StylistConfig::live("");
        let err = Stylist::from_config(&config).unwrap_err();
        assert!(matches!(err, StylistError::Config(_)));
        assert!(err.to_string().contains("GEMINI_API_KEY is required"));

        config.api_key = None;
        assert!(Stylist::from_config(&config).is_err());
    }

    #[test]
    fn test_live_mode_with_key() {
        let stylist = Stylist::from_config(&StylistConfig::live("test-key")).unwrap();
        assert!(!stylist.is_mock());
        assert!(format!("{:?}", stylist).contains("gemini-2.0-flash"));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = StylistConfig::mock();
        config.request_timeout_secs = 0;
        assert!(matches!(
            Stylist::from_config(&config),
            Err(StylistError::Config(_))
        ));
    }

    #[test]
    fn test_stylist_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Stylist>();
    }
}
