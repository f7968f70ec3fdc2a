use super::{NamedSnippet, Section};
use crate::snippet::SnippetSet;

pub(super) fn snippets() -> Vec<NamedSnippet> {
    vec![
        NamedSnippet::new("webhook-create", Section::Webhooks, webhook_create()),
        NamedSnippet::new("webhook-payload", Section::Webhooks, webhook_payload()),
        NamedSnippet::new("webhook-verify", Section::Webhooks, webhook_verify()),
    ]
}

fn webhook_create() -> SnippetSet {
    SnippetSet::multi([
        (
            "curl",
            r#"curl -X POST "https://api.stellantis-cv.com/v1/webhooks" \
  -H "Authorization: Bearer YOUR_ACCESS_TOKEN" \
  -H "Content-Type: application/json" \
  -d '{
    "url": "https://your-app.com/webhooks/stellantis",
    "events": [
      "vehicle.location.updated",
      "vehicle.diagnostic.alert",
      "vehicle.door.locked"
    ],
    "secret": "your_webhook_secret"
  }'"#,
        ),
        (
            "javascript",
            r#"const webhook = await client.webhooks.create({
  url: 'https://your-app.com/webhooks/stellantis',
  events: [
    'vehicle.location.updated',
    'vehicle.diagnostic.alert',
    'vehicle.door.locked'
  ],
  secret: 'your_webhook_secret'
});

console.log('Webhook created:', webhook.id);"#,
        ),
        (
            "python",
            r#"webhook = client.webhooks.create({
    'url': 'https://your-app.com/webhooks/stellantis',
    'events': [
        'vehicle.location.updated',
        'vehicle.diagnostic.alert',
        'vehicle.door.locked'
    ],
    'secret': 'your_webhook_secret'
})

print(f'Webhook created: {webhook["id"]}')"#,
        ),
    ])
    .with_title("Create Webhook Endpoint")
}

fn webhook_payload() -> SnippetSet {
    SnippetSet::single(
        r#"{
  "id": "evt_1234567890",
  "type": "vehicle.location.updated",
  "created": "2023-11-01T14:30:00Z",
  "data": {
    "vehicle_id": "veh_123456789",
    "location": {
      "latitude": 48.8566,
      "longitude": 2.3522,
      "accuracy": 5.2,
      "timestamp": "2023-11-01T14:29:45Z",
      "address": {
        "street": "Avenue des Champs-Élysées",
        "city": "Paris",
        "country": "France"
      }
    },
    "previous_location": {
      "latitude": 48.8560,
      "longitude": 2.3515,
      "timestamp": "2023-11-01T14:25:30Z"
    }
  }
}"#,
        "json",
    )
    .with_title("Example Payload")
}

fn webhook_verify() -> SnippetSet {
    SnippetSet::multi([
        (
            "javascript",
            r#"const crypto = require('crypto');

function verifyWebhook(payload, signature, secret) {
  const expectedSignature = crypto
    .createHmac('sha256', secret)
    .update(payload, 'utf8')
    .digest('hex');
  
  const actualSignature = signature.replace('sha256=', '');
  
  return crypto.timingSafeEqual(
    Buffer.from(expectedSignature, 'hex'),
    Buffer.from(actualSignature, 'hex')
  );
}

// Express.js example
app.post('/webhooks/stellantis', (req, res) => {
  const signature = req.headers['x-stellantis-signature'];
  const payload = JSON.stringify(req.body);
  
  if (!verifyWebhook(payload, signature, process.env.WEBHOOK_SECRET)) {
    return res.status(401).send('Unauthorized');
  }
  
  const event = req.body;
  console.log('Received event:', event.type);
  
  // Process the event
  switch (event.type) {
    case 'vehicle.location.updated':
      handleLocationUpdate(event.data);
      break;
    case 'vehicle.diagnostic.alert':
      handleDiagnosticAlert(event.data);
      break;
  }
  
  res.status(200).send('OK');
});"#,
        ),
        (
            "python",
            r#"import hmac
import hashlib
from flask import Flask, request, abort

app = Flask(__name__)

def verify_webhook(payload, signature, secret):
    expected_signature = hmac.new(
        secret.encode('utf-8'),
        payload.encode('utf-8'),
        hashlib.sha256
    ).hexdigest()
    
    actual_signature = signature.replace('sha256=', '')
    
    return hmac.compare_digest(expected_signature, actual_signature)

@app.route('/webhooks/stellantis', methods=['POST'])
def handle_webhook():
    signature = request.headers.get('X-Stellantis-Signature')
    payload = request.get_data(as_text=True)
    
    if not verify_webhook(payload, signature, WEBHOOK_SECRET):
        abort(401)
    
    event = request.json
    print(f'Received event: {event["type"]}')
    
    # Process the event
    if event['type'] == 'vehicle.location.updated':
        handle_location_update(event['data'])
    elif event['type'] == 'vehicle.diagnostic.alert':
        handle_diagnostic_alert(event['data'])
    
    return 'OK', 200"#,
        ),
    ])
    .with_title("Webhook Verification")
}
